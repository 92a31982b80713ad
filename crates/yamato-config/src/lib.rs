//! # Yamato Config
//!
//! Type-safe configuration management for the Yamato bot.
//!
//! This crate provides the configuration schema, its defaults, loading from
//! an optional TOML file plus process environment overrides, and validation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
