//! Default values for every configuration section.

use crate::schema::{Config, DiscordConfig, TrackerConfig};
use yamato_common::{LoggingConfig, UserId};

/// Production base URL of the stats tracker API.
pub const DEFAULT_TRACKER_BASE_URL: &str = "https://api.pubgtracker.com/v2/";

/// Reply language used when none is configured.
pub const DEFAULT_LOCALE: &str = "en";

/// Language codes replies are available in.
pub const SUPPORTED_LOCALES: [&str; 2] = ["en", "ja"];

impl Default for Config {
    fn default() -> Self {
        Self {
            discord: DiscordConfig::default(),
            tracker: TrackerConfig::default(),
            locale: DEFAULT_LOCALE.to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            client_id: UserId(0),
            voice_channel_id: None,
        }
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_TRACKER_BASE_URL.to_string(),
            log_recent_match: false,
        }
    }
}
