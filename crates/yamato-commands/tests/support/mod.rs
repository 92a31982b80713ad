//! Shared fakes for router tests.

#![allow(dead_code)]

use async_trait::async_trait;
use mockall::mock;
use std::sync::Mutex;
use yamato_commands::{ChatSession, Embed, InboundMessage};
use yamato_common::{
    test_utils::tracker_fixtures, ChannelId, GuildId, YamatoError, YamatoResult,
};
use yamato_tracker::{MatchHistory, Player, SteamInfo, StatsSource};

mock! {
    pub Stats {}

    #[async_trait]
    impl StatsSource for Stats {
        async fn get_player(
            &self,
            account_name: &str,
            region: &str,
            season: &str,
            mode: &str,
        ) -> YamatoResult<Player>;
        async fn get_match_history(&self, player: &Player) -> YamatoResult<MatchHistory>;
        async fn get_steam_info(&self, steam_id: &str) -> YamatoResult<SteamInfo>;
    }
}

/// Everything a [`RecordingSession`] was asked to do, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Message { channel_id: ChannelId, content: String },
    Embed { channel_id: ChannelId, embed: Embed },
    Join { guild_id: GuildId, channel_id: ChannelId },
    Leave { guild_id: GuildId },
}

/// A [`ChatSession`] that records calls and optionally fails them.
#[derive(Debug, Default)]
pub struct RecordingSession {
    sent: Mutex<Vec<Sent>>,
    pub fail_sends: bool,
    pub fail_join: bool,
    pub fail_leave: bool,
}

impl RecordingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_sends() -> Self {
        Self {
            fail_sends: true,
            ..Self::default()
        }
    }

    pub fn failing_voice() -> Self {
        Self {
            fail_join: true,
            fail_leave: true,
            ..Self::default()
        }
    }

    pub fn failing_leave() -> Self {
        Self {
            fail_leave: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|sent| match sent {
                Sent::Message { content, .. } => Some(content),
                _ => None,
            })
            .collect()
    }

    pub fn embeds(&self) -> Vec<Embed> {
        self.sent()
            .into_iter()
            .filter_map(|sent| match sent {
                Sent::Embed { embed, .. } => Some(embed),
                _ => None,
            })
            .collect()
    }

    fn record(&self, sent: Sent, fail: bool) -> YamatoResult<()> {
        self.sent.lock().unwrap().push(sent);
        if fail {
            Err(YamatoError::discord("rejected by fake session"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ChatSession for RecordingSession {
    async fn send_message(&self, channel_id: ChannelId, content: &str) -> YamatoResult<()> {
        self.record(
            Sent::Message {
                channel_id,
                content: content.to_string(),
            },
            self.fail_sends,
        )
    }

    async fn send_embed(&self, channel_id: ChannelId, embed: &Embed) -> YamatoResult<()> {
        self.record(
            Sent::Embed {
                channel_id,
                embed: embed.clone(),
            },
            self.fail_sends,
        )
    }

    async fn join_voice(&self, guild_id: GuildId, channel_id: ChannelId) -> YamatoResult<()> {
        self.record(Sent::Join { guild_id, channel_id }, self.fail_join)
    }

    async fn leave_voice(&self, guild_id: GuildId) -> YamatoResult<()> {
        self.record(Sent::Leave { guild_id }, self.fail_leave)
    }
}

pub const BOT_ID: u64 = 4242;
pub const TEXT_CHANNEL: ChannelId = ChannelId(100);
pub const VOICE_CHANNEL: ChannelId = ChannelId(200);
pub const GUILD: GuildId = GuildId(300);

pub fn message(content: &str) -> InboundMessage {
    InboundMessage {
        content: content.to_string(),
        author_name: "tester".to_string(),
        author_is_bot: false,
        channel_id: TEXT_CHANNEL,
        guild_id: Some(GUILD),
    }
}

pub fn bot_message(content: &str) -> InboundMessage {
    InboundMessage {
        author_is_bot: true,
        ..message(content)
    }
}

pub fn fixture_player() -> Player {
    serde_json::from_str(tracker_fixtures::player_json()).unwrap()
}

pub fn fixture_history() -> MatchHistory {
    let mut history: MatchHistory =
        serde_json::from_str(tracker_fixtures::match_history_json()).unwrap();
    history.sort_most_recent_first();
    history
}
