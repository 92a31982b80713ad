//! `!pubg <account> <region> <season> <mode>`: player stats overview.

use crate::{
    embed::Embed,
    session::{send_embed, send_message, ChatSession},
};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use yamato_common::{ChannelId, YamatoError, YamatoResult};
use yamato_i18n::ReplyCatalog;
use yamato_tracker::{filter_stats, labels, select_label, Player, Stats, StatsFilter, StatsSource};

/// Side bar colour of the overview embed.
pub const OVERVIEW_COLOR: u32 = 0x00ff00;

/// Number of arguments after the command token.
pub const ARGUMENT_COUNT: usize = 4;

/// Parsed arguments of a stats request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PubgQuery<'a> {
    /// Account name.
    pub account: &'a str,
    /// Region code.
    pub region: &'a str,
    /// Season code.
    pub season: &'a str,
    /// Mode code.
    pub mode: &'a str,
}

impl<'a> PubgQuery<'a> {
    /// Splits `content` on whitespace and takes exactly four arguments after
    /// the command token.
    ///
    /// # Errors
    ///
    /// [`YamatoError::Argument`] for any other count.
    pub fn parse(content: &'a str) -> YamatoResult<Self> {
        let args: Vec<&str> = content.split_whitespace().skip(1).collect();
        match args[..] {
            [account, region, season, mode] => Ok(Self {
                account,
                region,
                season,
                mode,
            }),
            _ => Err(YamatoError::argument(ARGUMENT_COUNT, args.len())),
        }
    }

    /// Exact-match criteria built from region, season and mode.
    pub fn filter(&self) -> StatsFilter {
        StatsFilter::new(self.region, self.season, self.mode)
    }
}

/// Builds the overview embed: avatar image, localized title and seven
/// inline fields in a fixed order.
pub fn overview_embed(player: &Player, stats: &Stats, replies: &ReplyCatalog) -> Embed {
    let mut embed = Embed::new()
        .title(&replies.overview_title)
        .color(OVERVIEW_COLOR);

    if let Some(avatar) = player.avatar.as_deref().filter(|url| !url.is_empty()) {
        embed = embed.image(avatar);
    }

    for (name, label) in replies.overview_fields.iter().zip(labels::OVERVIEW) {
        embed = embed.field(name, select_label(stats, label));
    }

    embed.inline_all_fields()
}

/// The stats command.
pub struct PubgCommand {
    stats: Arc<dyn StatsSource>,
    replies: Arc<ReplyCatalog>,
    log_recent_match: bool,
}

impl PubgCommand {
    /// Creates the handler.
    pub fn new(
        stats: Arc<dyn StatsSource>,
        replies: Arc<ReplyCatalog>,
        log_recent_match: bool,
    ) -> Self {
        Self {
            stats,
            replies,
            log_recent_match,
        }
    }

    /// Looks up the player and builds the overview.
    ///
    /// With `log_recent_match` set the match history is fetched too and its
    /// most recent entry logged; a failure there fails the whole lookup.
    #[instrument(skip(self))]
    pub async fn overview(&self, content: &str) -> YamatoResult<Embed> {
        let query = PubgQuery::parse(content)?;

        let player = self
            .stats
            .get_player(query.account, query.region, query.season, query.mode)
            .await?;

        if self.log_recent_match {
            let history = self.stats.get_match_history(&player).await?;
            match history.latest() {
                Some(latest) => info!(
                    match_id = latest.id,
                    updated = %latest.updated.display(),
                    mode = %latest.match_display,
                    kills = latest.kills,
                    rating = latest.rating,
                    "Most recent match"
                ),
                None => info!("No recent matches"),
            }
        }

        let stats = filter_stats(&player, &query.filter())?;
        Ok(overview_embed(&player, stats, &self.replies))
    }

    /// Handles `!pubg`. Every failure is answered with the usage message.
    pub async fn run(&self, session: &dyn ChatSession, channel_id: ChannelId, content: &str) {
        match self.overview(content).await {
            Ok(embed) => send_embed(session, channel_id, &embed).await,
            Err(e) => {
                warn!("Stats lookup failed: {}", e);
                send_message(session, channel_id, &self.replies.usage).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yamato_common::test_utils::tracker_fixtures;
    use yamato_i18n::Locale;

    #[test]
    fn test_parse_exactly_four() {
        let query = PubgQuery::parse("!pubg playerA na 2017-pre1 squad").unwrap();
        assert_eq!(query.account, "playerA");
        assert_eq!(query.mode, "squad");
        assert_eq!(query.filter(), StatsFilter::new("na", "2017-pre1", "squad"));
    }

    #[test]
    fn test_parse_wrong_counts() {
        for (content, actual) in [
            ("!pubg", 0),
            ("!pubg onlyonearg", 1),
            ("!pubg a b c", 3),
            ("!pubg a b c d e", 5),
        ] {
            let err = PubgQuery::parse(content).unwrap_err();
            assert!(matches!(
                err,
                YamatoError::Argument { expected: 4, actual: a } if a == actual
            ));
        }
    }

    #[test]
    fn test_overview_embed_fields() {
        let player = fixture_player();
        let stats = filter_stats(&player, &StatsFilter::new("na", "2017-pre1", "squad")).unwrap();
        let replies = ReplyCatalog::load(Locale::Japanese).unwrap();

        let embed = overview_embed(&player, stats, &replies);

        assert_eq!(embed.title.as_deref(), Some("全ステータス"));
        assert_eq!(embed.color, Some(OVERVIEW_COLOR));
        assert_eq!(embed.image, player.avatar);
        let values: Vec<&str> = embed.fields.iter().map(|f| f.value.as_str()).collect();
        assert_eq!(values, tracker_fixtures::NA_SQUAD_DISPLAY_VALUES);
        assert_eq!(embed.fields[0].name, "プレイ回数");
        assert!(embed.fields.iter().all(|f| f.inline));
    }

    #[test]
    fn test_overview_embed_missing_labels_are_empty() {
        let player = fixture_player();
        let stats = filter_stats(&player, &StatsFilter::new("eu", "2017-pre1", "squad")).unwrap();
        let replies = ReplyCatalog::load(Locale::English).unwrap();

        let embed = overview_embed(&player, stats, &replies);
        assert_eq!(embed.fields.len(), 7);
        assert_eq!(embed.fields[0].value, "4");
        assert!(embed.fields[1..].iter().all(|f| f.value.is_empty()));
    }

    fn fixture_player() -> Player {
        serde_json::from_str(tracker_fixtures::player_json()).unwrap()
    }
}
