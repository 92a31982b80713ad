//! # Yamato Common
//!
//! Shared types, utilities, and common functionality for the Yamato bot.
//!
//! This crate provides the error taxonomy, identifier newtypes, logging
//! bootstrap and time helpers used across all other crates in the workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::*;
pub use logging::{init_logging, LoggingConfig};
pub use types::*;
pub use utils::*;
