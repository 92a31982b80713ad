//! Picking one stats entry out of a profile and reading values from it.

use crate::models::{MatchHistory, MatchRecord, Player, Stats};
use std::fmt;
use yamato_common::{YamatoError, YamatoResult};

/// Region, season and mode a stats entry must match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatsFilter {
    /// Region code.
    pub region: String,
    /// Season code.
    pub season: String,
    /// Mode code.
    pub mode: String,
}

impl StatsFilter {
    /// Creates a filter.
    pub fn new(
        region: impl Into<String>,
        season: impl Into<String>,
        mode: impl Into<String>,
    ) -> Self {
        Self {
            region: region.into(),
            season: season.into(),
            mode: mode.into(),
        }
    }

    /// Case-sensitive comparison on all three fields.
    pub fn matches(&self, stats: &Stats) -> bool {
        stats.region == self.region && stats.season == self.season && stats.mode == self.mode
    }
}

impl fmt::Display for StatsFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "region={} season={} mode={}",
            self.region, self.season, self.mode
        )
    }
}

/// Returns the first entry of `player.stats` matching `filter`.
///
/// # Errors
///
/// [`YamatoError::NoMatch`] when no entry matches.
pub fn filter_stats<'a>(player: &'a Player, filter: &StatsFilter) -> YamatoResult<&'a Stats> {
    player
        .stats
        .iter()
        .find(|stats| filter.matches(stats))
        .ok_or_else(|| YamatoError::no_match(filter.to_string()))
}

/// Display value of the first status with `label`, or `""` when there is none.
pub fn select_label<'a>(stats: &'a Stats, label: &str) -> &'a str {
    stats
        .status
        .iter()
        .find(|status| status.label == label)
        .map_or("", |status| status.display_value.as_str())
}

/// Returns the first record in `history` for which `predicate` holds, in
/// the history's current order.
///
/// # Errors
///
/// [`YamatoError::NoMatch`] when no record matches.
pub fn filter_matches<F>(history: &MatchHistory, mut predicate: F) -> YamatoResult<&MatchRecord>
where
    F: FnMut(&MatchRecord) -> bool,
{
    history
        .iter()
        .find(|record| predicate(record))
        .ok_or_else(|| YamatoError::no_match("match history predicate"))
}

impl MatchHistory {
    /// See [`filter_matches`].
    pub fn find_match<F>(&self, predicate: F) -> YamatoResult<&MatchRecord>
    where
        F: FnMut(&MatchRecord) -> bool,
    {
        filter_matches(self, predicate)
    }
}

impl Player {
    /// See [`filter_stats`].
    pub fn stats_for(&self, filter: &StatsFilter) -> YamatoResult<&Stats> {
        filter_stats(self, filter)
    }
}

impl Stats {
    /// See [`select_label`].
    pub fn select_label(&self, label: &str) -> &str {
        select_label(self, label)
    }
}
