//! Configuration loading from an optional TOML file and the process environment.

use crate::schema::Config;
use std::path::PathBuf;
use tracing::{debug, info};
use yamato_common::{YamatoError, YamatoResult};

/// Environment variable names read by [`ConfigLoader`].
pub mod env_keys {
    /// Path of an optional TOML configuration file.
    pub const CONFIG_PATH: &str = "YAMATO_CONFIG";
    /// Discord bot token.
    pub const TOKEN: &str = "TOKEN";
    /// The bot's own user id.
    pub const CLIENT_ID: &str = "CLIENT_ID";
    /// Voice channel joined by `!vcjoin`.
    pub const VOICE_CHANNEL_ID: &str = "VOICE_CHANNEL_ID";
    /// Stats tracker API key.
    pub const PUBG_API_KEY: &str = "PUBG_API_KEY";
    /// Stats tracker base URL.
    pub const PUBG_API_BASE_URL: &str = "PUBG_API_BASE_URL";
    /// Toggle for the recent-match diagnostic fetch.
    pub const PUBG_LOG_RECENT_MATCH: &str = "PUBG_LOG_RECENT_MATCH";
    /// Reply language.
    pub const BOT_LOCALE: &str = "BOT_LOCALE";
    /// Log level used when `RUST_LOG` is unset.
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
}

/// Loads configuration: file values first, environment overrides on top.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Creates a loader reading the given TOML file before applying overrides.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Creates a loader whose file path comes from `YAMATO_CONFIG`, if set.
    pub fn from_env() -> Self {
        Self {
            path: std::env::var(env_keys::CONFIG_PATH)
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// Loads and validates configuration using the process environment.
    pub fn load(&self) -> YamatoResult<Config> {
        self.load_with(|key| std::env::var(key).ok())
    }

    /// Loads and validates configuration using `lookup` in place of the environment.
    pub fn load_with<F>(&self, lookup: F) -> YamatoResult<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match &self.path {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                let raw = std::fs::read_to_string(path).map_err(|e| {
                    YamatoError::config_with_source(
                        format!("Failed to read config file '{}'", path.display()),
                        e,
                    )
                })?;
                parse_toml(&raw)?
            }
            None => Config::default(),
        };

        apply_overrides(&mut config, lookup)?;
        config.validate()?;
        Ok(config)
    }
}

/// Parses a TOML document into a [`Config`]; missing sections take defaults.
pub fn parse_toml(raw: &str) -> YamatoResult<Config> {
    toml::from_str(raw).map_err(|e| YamatoError::config_with_source("TOML parsing error", e))
}

/// Applies environment style overrides. Empty values count as unset.
pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> YamatoResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| {
        lookup(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    };

    if let Some(token) = get(env_keys::TOKEN) {
        config.discord.token = token;
    }
    if let Some(raw) = get(env_keys::CLIENT_ID) {
        config.discord.client_id = raw.parse().map_err(|e| {
            YamatoError::config_with_source(format!("{} is not a valid id", env_keys::CLIENT_ID), e)
        })?;
    }
    if let Some(raw) = get(env_keys::VOICE_CHANNEL_ID) {
        config.discord.voice_channel_id = Some(raw.parse().map_err(|e| {
            YamatoError::config_with_source(
                format!("{} is not a valid id", env_keys::VOICE_CHANNEL_ID),
                e,
            )
        })?);
    }
    if let Some(api_key) = get(env_keys::PUBG_API_KEY) {
        config.tracker.api_key = api_key;
    }
    if let Some(base_url) = get(env_keys::PUBG_API_BASE_URL) {
        config.tracker.base_url = base_url;
    }
    if let Some(raw) = get(env_keys::PUBG_LOG_RECENT_MATCH) {
        config.tracker.log_recent_match = parse_flag(env_keys::PUBG_LOG_RECENT_MATCH, &raw)?;
    }
    if let Some(locale) = get(env_keys::BOT_LOCALE) {
        config.locale = locale;
    }
    if let Some(level) = get(env_keys::LOG_LEVEL) {
        config.logging.level = level;
    }

    debug!("Applied environment overrides");
    Ok(())
}

fn parse_flag(key: &str, raw: &str) -> YamatoResult<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(YamatoError::config(format!(
            "{key} must be a boolean, got '{other}'"
        ))),
    }
}
