//! # Yamato Tracker
//!
//! Client for the PUBG tracker statistics API.
//!
//! Requests are resolved against a configurable base URL, signed with the
//! `trn-api-key` header and decoded into the typed models of [`models`].
//! Helpers in [`filter`] pick one season/region/mode entry out of a profile
//! and read display values out of it by label.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod filter;
pub mod models;
pub mod time;

pub use client::*;
pub use filter::*;
pub use models::*;
pub use time::*;
