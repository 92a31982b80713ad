//! Response models for the tracker API.

use crate::time::TrackerTime;
use serde::{Deserialize, Serialize};

/// Stat labels shown in the overview embed, in display order.
pub mod labels {
    /// Total rounds played.
    pub const ROUNDS_PLAYED: &str = "Rounds Played";
    /// Kill/death ratio.
    pub const KD_RATIO: &str = "K/D Ratio";
    /// Win percentage.
    pub const WIN_RATIO: &str = "Win %";
    /// Total wins.
    pub const WINS: &str = "Wins";
    /// Skill rating.
    pub const RATING: &str = "Rating";
    /// Headshot kill percentage.
    pub const HEADSHOT_KILL_RATIO: &str = "Headshot Kill Ratio";
    /// Longest kill distance.
    pub const LONGEST_KILL: &str = "Longest Kill";

    /// All overview labels in the order their fields appear.
    pub const OVERVIEW: [&str; 7] = [
        ROUNDS_PLAYED,
        KD_RATIO,
        WIN_RATIO,
        WINS,
        RATING,
        HEADSHOT_KILL_RATIO,
        LONGEST_KILL,
    ];
}

/// A player profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Tracker-internal numeric id.
    #[serde(default)]
    pub pubg_tracker_id: i64,
    /// Game account id; used for the match history endpoint.
    pub account_id: String,
    /// Platform code.
    #[serde(default)]
    pub platform: i32,
    /// In-game name.
    pub nick_name: String,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar: Option<String>,
    /// Linked Steam display name.
    #[serde(default)]
    pub steam_name: Option<String>,
    /// Linked Steam id.
    #[serde(default)]
    pub steam_id: Option<String>,
    /// When the tracker last refreshed this profile.
    #[serde(default)]
    pub last_updated: Option<TrackerTime>,
    /// Total play time in seconds.
    #[serde(default)]
    pub time_played: i64,
    /// One entry per region, season and mode the player has played.
    #[serde(default)]
    pub stats: Vec<Stats>,
}

/// Statistics for one region, season and mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Region code such as `na` or `krj`.
    pub region: String,
    /// Season code such as `2017-pre1`.
    pub season: String,
    /// Mode code such as `squad-fpp`.
    pub mode: String,
    /// Individual stat values.
    #[serde(rename = "stats", default)]
    pub status: Vec<Status>,
}

/// A single labelled stat value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    /// Human readable label, e.g. `K/D Ratio`.
    pub label: String,
    /// Machine field name.
    #[serde(default)]
    pub field: String,
    /// Grouping such as `Performance`.
    #[serde(default)]
    pub category: String,
    /// Numeric value.
    #[serde(default)]
    pub value_dec: f64,
    /// Raw value as text.
    #[serde(default)]
    pub value: String,
    /// Formatted value for display.
    #[serde(default)]
    pub display_value: String,
}

/// One entry of a player's match history.
///
/// Only `Updated` is required; absent fields decode as zero or empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[allow(missing_docs)]
pub struct MatchRecord {
    #[serde(default)]
    pub id: i64,
    pub updated: TrackerTime,
    #[serde(rename = "UpdatedJS", default)]
    pub updated_js: String,
    #[serde(default)]
    pub season: i32,
    #[serde(default)]
    pub season_display: String,
    #[serde(rename = "Match", default)]
    pub match_type: i32,
    #[serde(default)]
    pub match_display: String,
    #[serde(default)]
    pub region: i32,
    #[serde(default)]
    pub region_display: String,
    #[serde(default)]
    pub rounds: i64,
    #[serde(default)]
    pub wins: i64,
    #[serde(default)]
    pub kills: i64,
    #[serde(default)]
    pub assists: i64,
    #[serde(default)]
    pub top10: i64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub rating_change: f64,
    #[serde(default)]
    pub rating_rank: i64,
    #[serde(default)]
    pub rating_rank_change: i64,
    #[serde(default)]
    pub kd: f64,
    #[serde(default)]
    pub damage: i64,
    #[serde(default)]
    pub time_survived: f64,
    #[serde(default)]
    pub win_rating: i64,
    #[serde(default)]
    pub win_rank: i64,
    #[serde(default)]
    pub win_rating_change: i64,
    #[serde(default)]
    pub win_rating_rank_change: i64,
    #[serde(default)]
    pub kill_rating: i64,
    #[serde(default)]
    pub kill_rank: i64,
    #[serde(default)]
    pub kill_rating_change: i64,
    #[serde(default)]
    pub kill_rating_rank_change: i64,
    #[serde(default)]
    pub move_distance: f64,
}

/// A player's recent matches.
///
/// [`crate::StatsClient::get_match_history`] returns it sorted most recent
/// first; matches sharing an instant keep their response order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchHistory(Vec<MatchRecord>);

impl MatchHistory {
    /// Wraps records without reordering them.
    pub const fn new(records: Vec<MatchRecord>) -> Self {
        Self(records)
    }

    /// Stable sort, most recent `updated` first.
    pub fn sort_most_recent_first(&mut self) {
        self.0.sort_by(|a, b| b.updated.cmp(&a.updated));
    }

    /// First record, which is the most recent once sorted.
    pub fn latest(&self) -> Option<&MatchRecord> {
        self.0.first()
    }

    /// Records in their current order.
    pub fn records(&self) -> &[MatchRecord] {
        &self.0
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no records.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates records in their current order.
    pub fn iter(&self) -> std::slice::Iter<'_, MatchRecord> {
        self.0.iter()
    }

    /// Unwraps into the record list.
    pub fn into_inner(self) -> Vec<MatchRecord> {
        self.0
    }
}

impl From<Vec<MatchRecord>> for MatchHistory {
    fn from(records: Vec<MatchRecord>) -> Self {
        Self(records)
    }
}

impl<'a> IntoIterator for &'a MatchHistory {
    type Item = &'a MatchRecord;
    type IntoIter = std::slice::Iter<'a, MatchRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Steam identity lookup result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[allow(missing_docs)]
pub struct SteamInfo {
    pub account_id: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub steam_id: String,
    #[serde(default)]
    pub steam_name: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub invite_allow: String,
}
