//! # venuescout protocols
//!
//! Shared data model and the render engine interface for venuescout.
//! Contains only types and trait definitions - no implementations.
//!
//! ## Core Traits
//!
//! - [`RenderEngine`] - Opens isolated browsing contexts and navigates them
//! - [`PageHandle`] - Queries, evaluates and interacts with one rendered page

pub mod error;
pub mod render;
pub mod venue;

pub use error::RenderError;
pub use render::{
    evaluate_as, ClickTarget, ElementText, NavOptions, PageHandle, RenderEngine, WaitCondition,
    WaitUntil,
};
pub use venue::{RawVenueRecord, Source, Venue, VenueType};
