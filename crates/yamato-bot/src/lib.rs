//! # Yamato Bot
//!
//! Discord bot that posts PUBG tracker statistics and joins voice channels
//! on request.
//!
//! This is the main binary crate: it wires configuration, the tracker
//! client and localized replies into the command router, then runs the
//! serenity client with songbird voice support until shutdown.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bot;
pub mod error;

pub use bot::*;
pub use error::*;
