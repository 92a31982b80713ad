//! Configuration schema definitions using serde.

use serde::{Deserialize, Serialize};
use std::fmt;
use yamato_common::{ChannelId, LoggingConfig, UserId};

/// Main configuration structure for the Yamato bot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Discord configuration.
    pub discord: DiscordConfig,
    /// Stats tracker API configuration.
    pub tracker: TrackerConfig,
    /// Reply language code (`en` or `ja`).
    pub locale: String,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Discord bot configuration.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscordConfig {
    /// Discord bot token, without the `Bot ` prefix.
    pub token: String,
    /// The bot's own user id, used to recognise `<@id> !command` mentions.
    pub client_id: UserId,
    /// Voice channel joined by `!vcjoin`.
    pub voice_channel_id: Option<ChannelId>,
}

/// Stats tracker API configuration.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Value sent in the `trn-api-key` header.
    pub api_key: String,
    /// Absolute base URL every endpoint is resolved against.
    pub base_url: String,
    /// Also fetch match history during `!pubg` and log the most recent match.
    pub log_recent_match: bool,
}

impl fmt::Debug for DiscordConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscordConfig")
            .field("token", &"<redacted>")
            .field("client_id", &self.client_id)
            .field("voice_channel_id", &self.voice_channel_id)
            .finish()
    }
}

impl fmt::Debug for TrackerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackerConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("log_recent_match", &self.log_recent_match)
            .finish()
    }
}
