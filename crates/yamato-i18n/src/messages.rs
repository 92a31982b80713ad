//! Message ids and the resolved reply text handed to command handlers.

use crate::{bundle::Translator, Locale};
use yamato_common::YamatoResult;

/// Message ids present in every locale resource.
pub mod message_ids {
    /// Usage hint for the stats command.
    pub const USAGE: &str = "usage";
    /// Title of the stats overview embed.
    pub const OVERVIEW_TITLE: &str = "overview-title";
    /// Rounds played field name.
    pub const FIELD_ROUNDS_PLAYED: &str = "field-rounds-played";
    /// K/D ratio field name.
    pub const FIELD_KD_RATIO: &str = "field-kd-ratio";
    /// Win percentage field name.
    pub const FIELD_WIN_RATIO: &str = "field-win-ratio";
    /// Wins field name.
    pub const FIELD_WINS: &str = "field-wins";
    /// Rating field name.
    pub const FIELD_RATING: &str = "field-rating";
    /// Headshot kill ratio field name.
    pub const FIELD_HEADSHOT_KILL_RATIO: &str = "field-headshot-kill-ratio";
    /// Longest kill field name.
    pub const FIELD_LONGEST_KILL: &str = "field-longest-kill";

    /// Overview field names in display order.
    pub const OVERVIEW_FIELDS: [&str; 7] = [
        FIELD_ROUNDS_PLAYED,
        FIELD_KD_RATIO,
        FIELD_WIN_RATIO,
        FIELD_WINS,
        FIELD_RATING,
        FIELD_HEADSHOT_KILL_RATIO,
        FIELD_LONGEST_KILL,
    ];
}

/// Every string the command handlers send, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyCatalog {
    /// Sent for any `!pubg` failure.
    pub usage: String,
    /// Overview embed title.
    pub overview_title: String,
    /// Overview embed field names, in display order.
    pub overview_fields: [String; 7],
}

impl ReplyCatalog {
    /// Resolves the catalog for `locale`.
    pub fn load(locale: Locale) -> YamatoResult<Self> {
        Self::from_translator(&Translator::new(locale)?)
    }

    /// Resolves the catalog through an existing translator.
    pub fn from_translator(translator: &Translator) -> YamatoResult<Self> {
        let mut overview_fields: [String; 7] = Default::default();
        for (slot, id) in overview_fields.iter_mut().zip(message_ids::OVERVIEW_FIELDS) {
            *slot = translator.message(id)?;
        }

        Ok(Self {
            usage: translator.message(message_ids::USAGE)?,
            overview_title: translator.message(message_ids::OVERVIEW_TITLE)?,
            overview_fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_usage_is_exact() {
        let catalog = ReplyCatalog::load(Locale::English).unwrap();
        assert_eq!(
            catalog.usage,
            "`!pubg [account] [na/eu/as/oc/sa/sea/krj] [2017-pre1/2017-pre2/2017-pre3/2017-pre4/2017-pre5] [solo/duo/squad/solo-fpp/duo-fpp/squad-fpp]`"
        );
    }

    #[test]
    fn test_japanese_catalog() {
        let catalog = ReplyCatalog::load(Locale::Japanese).unwrap();
        assert_eq!(catalog.overview_title, "全ステータス");
        assert_eq!(catalog.overview_fields[0], "プレイ回数");
        assert_eq!(catalog.overview_fields[6], "遠距離キル");
        assert!(catalog.usage.contains("[アカウント名]"));
    }
}
