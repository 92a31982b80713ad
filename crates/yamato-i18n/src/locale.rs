//! Locale management and utilities

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use unic_langid::LanguageIdentifier;
use yamato_common::{YamatoError, YamatoResult};

/// Supported locales
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Locale {
    /// English.
    #[default]
    #[serde(rename = "en")]
    English,
    /// Japanese.
    #[serde(rename = "ja")]
    Japanese,
}

impl Locale {
    /// Short language code, as accepted in configuration.
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Japanese => "ja",
        }
    }

    /// Parse a locale from a language code such as `ja` or `en-US`.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        let language = code.split(['-', '_']).next().unwrap_or_default();
        match language {
            "en" => Some(Self::English),
            "ja" => Some(Self::Japanese),
            _ => None,
        }
    }

    /// Convert to a Fluent `LanguageIdentifier`.
    pub fn to_language_identifier(self) -> YamatoResult<LanguageIdentifier> {
        self.code().parse().map_err(|_| {
            YamatoError::localization("Invalid language identifier", self.code())
        })
    }

    /// Get all supported locales
    pub const fn all() -> [Self; 2] {
        [Self::English, Self::Japanese]
    }

    /// The embedded Fluent resource for this locale.
    pub const fn resource(self) -> &'static str {
        match self {
            Self::English => include_str!("../locales/en.ftl"),
            Self::Japanese => include_str!("../locales/ja.ftl"),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = YamatoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
            .ok_or_else(|| YamatoError::localization(format!("Unsupported locale '{s}'"), s))
    }
}
