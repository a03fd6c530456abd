//! # venuescout config
//!
//! Every tunable of the crawl pipeline (seed URL, selectors, heuristic
//! tables, caps and timeouts) lives in one [`ScoutConfig`] loaded from TOML.

mod error;
mod loader;
mod schema;
mod validator;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};
