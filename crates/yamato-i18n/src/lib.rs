//! # Yamato I18n
//!
//! Localized reply text for the Yamato bot, backed by Fluent bundles.
//!
//! Resources for every supported [`Locale`] are compiled into the binary; a
//! [`Translator`] formats individual messages and [`ReplyCatalog`] resolves
//! everything the command handlers send up front.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bundle;
pub mod locale;
pub mod messages;

pub use bundle::Translator;
pub use locale::Locale;
pub use messages::{message_ids, ReplyCatalog};
