//! Timestamps as reported by the tracker.
//!
//! The tracker mixes two layouts: full RFC 3339 with a zone designator, and a
//! bare `2017-08-01T10:00:00.00` form without one. The bare form is read as
//! UTC. Either way the value is normalised into the fixed UTC+9 zone the bot
//! displays times in.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};
use yamato_common::{format_display_time, to_tracker_zone, YamatoError, YamatoResult};

/// Layout of zone-less tracker timestamps. The fractional part is optional.
pub const ZONELESS_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// An instant normalised to UTC+9.
///
/// Ordering and equality compare instants, so two timestamps written with
/// different offsets compare equal when they name the same moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TrackerTime(DateTime<FixedOffset>);

impl TrackerTime {
    /// Parses either accepted layout.
    pub fn parse(raw: &str) -> YamatoResult<Self> {
        let raw = raw.trim();
        let instant = match DateTime::parse_from_rfc3339(raw) {
            Ok(zoned) => zoned.with_timezone(&Utc),
            Err(_) => NaiveDateTime::parse_from_str(raw, ZONELESS_LAYOUT)
                .map(|naive| Utc.from_utc_datetime(&naive))
                .map_err(|e| {
                    YamatoError::decode_with_source(format!("Unrecognised timestamp '{raw}'"), e)
                })?,
        };

        Ok(Self(to_tracker_zone(&instant)))
    }

    /// The instant in UTC+9.
    pub fn instant(&self) -> DateTime<FixedOffset> {
        self.0
    }

    /// `YYYY-MM-DD HH:MM` in UTC+9.
    pub fn display(&self) -> String {
        format_display_time(&self.0)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for TrackerTime {
    fn from(value: DateTime<Tz>) -> Self {
        Self(to_tracker_zone(&value))
    }
}

impl FromStr for TrackerTime {
    type Err = YamatoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TrackerTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for TrackerTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

impl Serialize for TrackerTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_rfc3339())
    }
}
