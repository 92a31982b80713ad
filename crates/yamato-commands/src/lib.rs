//! # Yamato Commands
//!
//! Message routing and command handlers for the Yamato bot.
//!
//! Every inbound chat message goes through [`CommandRouter::handle`], which
//! logs it, drops messages from other bots and dispatches on a literal prefix
//! to the echo, stats and voice handlers. Handlers talk to Discord only through
//! the [`ChatSession`] capability and to the tracker only through
//! [`yamato_tracker::StatsSource`], so both can be replaced in tests.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod discord;
pub mod echo;
pub mod embed;
pub mod framework;
pub mod pubg;
pub mod router;
pub mod session;
pub mod voice;

pub use discord::{SerenitySession, VoiceActivityLogger};
pub use embed::{Embed, EmbedField};
pub use framework::*;
pub use pubg::{overview_embed, PubgCommand, PubgQuery, OVERVIEW_COLOR};
pub use router::{Command, CommandRouter, RouterSettings};
pub use session::{ChatSession, InboundMessage};
pub use voice::{VoiceCommands, VoiceRegistry};
