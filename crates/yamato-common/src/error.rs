//! Error types shared by every Yamato crate.

use thiserror::Error;

/// Boxed error source carried by most variants.
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias for Yamato operations.
pub type YamatoResult<T> = std::result::Result<T, YamatoError>;

/// Main error type for Yamato operations.
#[derive(Error, Debug)]
pub enum YamatoError {
    /// Bad base URL, missing credentials or otherwise unusable configuration.
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable description.
        message: String,
        /// Underlying error, if any.
        #[source]
        source: Option<BoxedSource>,
    },

    /// The endpoint could not be turned into a request.
    #[error("Request build error: {message}")]
    RequestBuild {
        /// Human readable description.
        message: String,
        /// Underlying error, if any.
        #[source]
        source: Option<BoxedSource>,
    },

    /// Connection failure, timeout or a rejected HTTP status.
    #[error("Network error: {message}")]
    Network {
        /// Human readable description.
        message: String,
        /// HTTP status code, when the server answered.
        status: Option<u16>,
        /// Underlying error, if any.
        #[source]
        source: Option<BoxedSource>,
    },

    /// Malformed JSON, unexpected shape or unparseable timestamp.
    #[error("Decode error: {message}")]
    Decode {
        /// Human readable description.
        message: String,
        /// Underlying error, if any.
        #[source]
        source: Option<BoxedSource>,
    },

    /// A stats filter matched nothing.
    #[error("No stats matched {criteria}")]
    NoMatch {
        /// The filter that matched nothing.
        criteria: String,
    },

    /// A command was invoked with the wrong number of arguments.
    #[error("Expected {expected} arguments, got {actual}")]
    Argument {
        /// Arguments the command takes.
        expected: usize,
        /// Arguments it was given.
        actual: usize,
    },

    /// Joining or leaving a voice channel failed.
    #[error("Voice error: {message}")]
    Voice {
        /// Human readable description.
        message: String,
        /// Underlying error, if any.
        #[source]
        source: Option<BoxedSource>,
    },

    /// Discord API related errors.
    #[error("Discord API error: {message}")]
    Discord {
        /// Human readable description.
        message: String,
        /// Underlying error, if any.
        #[source]
        source: Option<BoxedSource>,
    },

    /// Missing or unformattable localized message.
    #[error("Localization error: {message}")]
    Localization {
        /// Human readable description.
        message: String,
        /// Locale being formatted, if known.
        locale: Option<String>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl YamatoError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new request build error with source
    pub fn request_build_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::RequestBuild {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network {
            message: msg.into(),
            status: None,
            source: None,
        }
    }

    /// Create a new network error carrying the HTTP status that was returned
    pub fn network_with_status(msg: impl Into<String>, status: u16) -> Self {
        Self::Network {
            message: msg.into(),
            status: Some(status),
            source: None,
        }
    }

    /// Create a new network error with source
    pub fn network_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Network {
            message: msg.into(),
            status: None,
            source: Some(Box::new(source)),
        }
    }

    /// Create a new decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new decode error with source
    pub fn decode_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Decode {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new no-match error describing the criteria that failed
    pub fn no_match(criteria: impl Into<String>) -> Self {
        Self::NoMatch {
            criteria: criteria.into(),
        }
    }

    /// Create a new argument count error
    pub const fn argument(expected: usize, actual: usize) -> Self {
        Self::Argument { expected, actual }
    }

    /// Create a new voice error
    pub fn voice(msg: impl Into<String>) -> Self {
        Self::Voice {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new Discord API error
    pub fn discord(msg: impl Into<String>) -> Self {
        Self::Discord {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new Discord API error with source
    pub fn discord_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Discord {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new localization error for the given locale
    pub fn localization(msg: impl Into<String>, locale: impl Into<String>) -> Self {
        Self::Localization {
            message: msg.into(),
            locale: Some(locale.into()),
        }
    }

    /// HTTP status attached to a network error, if any
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Network { status, .. } => *status,
            _ => None,
        }
    }
}

/// Convert from serde_json::Error to YamatoError
impl From<serde_json::Error> for YamatoError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode_with_source("Failed to decode JSON response", err)
    }
}

/// Convert from reqwest::Error to YamatoError
impl From<reqwest::Error> for YamatoError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::network_with_source("Request timeout", err)
        } else if err.is_connect() {
            Self::network_with_source("Connection failed", err)
        } else if err.is_decode() {
            Self::decode_with_source("Failed to decode response body", err)
        } else if let Some(status) = err.status() {
            Self::Network {
                message: format!("HTTP error: {}", status.as_u16()),
                status: Some(status.as_u16()),
                source: Some(Box::new(err)),
            }
        } else {
            Self::network_with_source("Network request failed", err)
        }
    }
}
