//! Startup validation. Every failure here is fatal.

use crate::{defaults::SUPPORTED_LOCALES, schema::Config};
use url::Url;
use yamato_common::{YamatoError, YamatoResult};

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> YamatoResult<()> {
        if self.discord.token.trim().is_empty() {
            return Err(YamatoError::config("Discord token cannot be empty"));
        }

        if self.discord.client_id.0 == 0 {
            return Err(YamatoError::config("Discord client id must be set"));
        }

        if self.discord.voice_channel_id.is_some_and(|id| id.0 == 0) {
            return Err(YamatoError::config("Voice channel id must be non-zero"));
        }

        if self.tracker.api_key.trim().is_empty() {
            return Err(YamatoError::config("Tracker API key cannot be empty"));
        }

        validate_base_url(&self.tracker.base_url)?;

        validate_locale(&self.locale)?;

        Ok(())
    }
}

/// Checks that `raw` is an absolute URL that relative endpoints can resolve against.
pub fn validate_base_url(raw: &str) -> YamatoResult<Url> {
    let url = Url::parse(raw).map_err(|e| {
        YamatoError::config_with_source(format!("Invalid tracker base URL '{raw}'"), e)
    })?;

    if url.cannot_be_a_base() {
        return Err(YamatoError::config(format!(
            "Tracker base URL '{raw}' cannot be used as a base"
        )));
    }

    Ok(url)
}

/// Accepts a supported language code, optionally with a region (`ja-JP`).
pub fn validate_locale(raw: &str) -> YamatoResult<()> {
    let language = raw
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    if SUPPORTED_LOCALES.contains(&language.as_str()) {
        Ok(())
    } else {
        Err(YamatoError::config(format!(
            "Unsupported locale '{raw}', expected one of {}",
            SUPPORTED_LOCALES.join(", ")
        )))
    }
}
