//! Minimal Chrome DevTools Protocol client.
//!
//! One WebSocket connection to the browser target carries every command;
//! page sessions are multiplexed over it with flattened `sessionId`s.

mod client;
mod error;
mod protocol;
mod session;

pub use client::{fetch_version, CdpClient};
pub use error::CdpError;
pub use protocol::*;
pub use session::PageSession;
