//! Application-wide error types using thiserror.

use poise::serenity_prelude as serenity;
use yamato_common::YamatoError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum BotError {
    /// Configuration, tracker or localization setup error.
    #[error("Setup error: {0}")]
    Setup(#[from] YamatoError),

    /// Discord/Serenity error.
    #[error("Discord error: {0}")]
    Discord(#[from] serenity::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the bot application.
pub type BotResult<T> = Result<T, BotError>;
