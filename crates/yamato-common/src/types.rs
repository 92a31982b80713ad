//! Common type definitions and newtype wrappers for domain modeling.

use serde::{Deserialize, Serialize};
use std::{fmt, num::ParseIntError, str::FromStr};

macro_rules! snowflake {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }
    };
}

snowflake!(
    /// A Discord channel ID (text or voice).
    ChannelId
);

snowflake!(
    /// A Discord guild ID.
    GuildId
);

snowflake!(
    /// A Discord user ID.
    UserId
);

impl UserId {
    /// The plain mention form, `<@id>`.
    pub fn mention(self) -> String {
        format!("<@{}>", self.0)
    }

    /// The nickname mention form, `<@!id>`, still sent by some clients.
    pub fn nickname_mention(self) -> String {
        format!("<@!{}>", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let id: ChannelId = " 123456789012345678 ".parse().unwrap();
        assert_eq!(id, ChannelId(123_456_789_012_345_678));
        assert_eq!(id.to_string(), "123456789012345678");
        assert!("not-a-number".parse::<GuildId>().is_err());
    }

    #[test]
    fn test_mentions() {
        let user = UserId(42);
        assert_eq!(user.mention(), "<@42>");
        assert_eq!(user.nickname_mention(), "<@!42>");
    }
}
