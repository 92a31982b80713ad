//! Prefix dispatch for inbound chat messages.

use crate::{
    echo,
    pubg::PubgCommand,
    session::{ChatSession, InboundMessage},
    voice::{VoiceCommands, VoiceRegistry},
};
use std::sync::Arc;
use tracing::{debug, info};
use yamato_common::{ChannelId, UserId};
use yamato_config::Config;
use yamato_i18n::ReplyCatalog;
use yamato_tracker::StatsSource;

/// Echo command prefix.
pub const ECHO_PREFIX: &str = "!echo";
/// Stats command prefix.
pub const PUBG_PREFIX: &str = "!pubg";
/// Voice join command, after the bot mention.
pub const VOICE_JOIN: &str = "!vcjoin";
/// Voice leave command, after the bot mention.
pub const VOICE_LEAVE: &str = "!vcleave";

/// A recognised command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// `!echo ...`
    Echo,
    /// `!pubg <account> <region> <season> <mode>`
    Pubg,
    /// `<mention> !vcjoin`
    VoiceJoin,
    /// `<mention> !vcleave`
    VoiceLeave,
}

/// Values the router needs from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouterSettings {
    /// The bot's own user id; voice commands must start with its mention.
    pub self_id: UserId,
    /// Channel joined by `!vcjoin`.
    pub voice_channel_id: Option<ChannelId>,
    /// Fetch and log the latest match during `!pubg`.
    pub log_recent_match: bool,
}

impl RouterSettings {
    /// Extracts the router settings from the bot configuration.
    pub const fn from_config(config: &Config) -> Self {
        Self {
            self_id: config.discord.client_id,
            voice_channel_id: config.discord.voice_channel_id,
            log_recent_match: config.tracker.log_recent_match,
        }
    }
}

/// Routes inbound messages to command handlers.
pub struct CommandRouter {
    routes: Vec<(String, Command)>,
    pubg: PubgCommand,
    voice: VoiceCommands,
}

impl CommandRouter {
    /// Builds the route table and handlers.
    pub fn new(
        settings: RouterSettings,
        stats: Arc<dyn StatsSource>,
        replies: Arc<ReplyCatalog>,
    ) -> Self {
        Self::with_registry(settings, stats, replies, VoiceRegistry::new())
    }

    /// Like [`CommandRouter::new`] with an existing voice registry.
    pub fn with_registry(
        settings: RouterSettings,
        stats: Arc<dyn StatsSource>,
        replies: Arc<ReplyCatalog>,
        registry: VoiceRegistry,
    ) -> Self {
        Self {
            routes: route_table(settings.self_id),
            pubg: PubgCommand::new(stats, replies, settings.log_recent_match),
            voice: VoiceCommands::new(registry, settings.voice_channel_id),
        }
    }

    /// The command `content` starts with. Earlier routes win.
    pub fn dispatch(&self, content: &str) -> Option<Command> {
        self.routes
            .iter()
            .find(|(prefix, _)| content.starts_with(prefix.as_str()))
            .map(|(_, command)| *command)
    }

    /// Voice connections held by this router.
    pub const fn voice_registry(&self) -> &VoiceRegistry {
        self.voice.registry()
    }

    /// Handles one inbound message.
    ///
    /// Every message is logged first. Messages from bots, including this
    /// one, are then dropped.
    pub async fn handle(&self, session: &dyn ChatSession, message: &InboundMessage) {
        info!(
            channel_id = %message.channel_id,
            author = %message.author_name,
            "> {}",
            message.content
        );

        if message.author_is_bot {
            debug!("Ignoring message from bot {}", message.author_name);
            return;
        }

        let Some(command) = self.dispatch(&message.content) else {
            return;
        };
        debug!(?command, "Dispatching command");

        match command {
            Command::Echo => echo::run(session, message.channel_id, &message.content).await,
            Command::Pubg => {
                self.pubg
                    .run(session, message.channel_id, &message.content)
                    .await;
            }
            Command::VoiceJoin => self.voice.join(session, message.guild_id).await,
            Command::VoiceLeave => self.voice.leave(session, message.guild_id).await,
        }
    }
}

/// Prefixes in priority order. Both mention forms are accepted.
fn route_table(self_id: UserId) -> Vec<(String, Command)> {
    let mut routes = vec![
        (ECHO_PREFIX.to_string(), Command::Echo),
        (PUBG_PREFIX.to_string(), Command::Pubg),
    ];
    for (name, command) in [(VOICE_JOIN, Command::VoiceJoin), (VOICE_LEAVE, Command::VoiceLeave)] {
        for mention in [self_id.mention(), self_id.nickname_mention()] {
            routes.push((format!("{mention} {name}"), command));
        }
    }
    routes
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use yamato_common::{YamatoError, YamatoResult};
    use yamato_i18n::Locale;
    use yamato_tracker::{MatchHistory, Player, SteamInfo};

    struct Unreachable;

    #[async_trait]
    impl StatsSource for Unreachable {
        async fn get_player(&self, _: &str, _: &str, _: &str, _: &str) -> YamatoResult<Player> {
            Err(YamatoError::network("offline"))
        }

        async fn get_match_history(&self, _: &Player) -> YamatoResult<MatchHistory> {
            Err(YamatoError::network("offline"))
        }

        async fn get_steam_info(&self, _: &str) -> YamatoResult<SteamInfo> {
            Err(YamatoError::network("offline"))
        }
    }

    fn router() -> CommandRouter {
        let settings = RouterSettings {
            self_id: UserId(42),
            voice_channel_id: Some(ChannelId(7)),
            log_recent_match: false,
        };
        let replies = Arc::new(ReplyCatalog::load(Locale::English).unwrap());
        CommandRouter::new(settings, Arc::new(Unreachable), replies)
    }

    #[test]
    fn test_dispatch_prefixes() {
        let router = router();
        assert_eq!(router.dispatch("!echo hi"), Some(Command::Echo));
        assert_eq!(router.dispatch("!pubg a b c d"), Some(Command::Pubg));
        assert_eq!(router.dispatch("<@42> !vcjoin"), Some(Command::VoiceJoin));
        assert_eq!(router.dispatch("<@!42> !vcjoin now"), Some(Command::VoiceJoin));
        assert_eq!(router.dispatch("<@42> !vcleave"), Some(Command::VoiceLeave));
        assert_eq!(router.dispatch("<@!42> !vcleave"), Some(Command::VoiceLeave));
    }

    #[test]
    fn test_dispatch_misses() {
        let router = router();
        assert_eq!(router.dispatch("hello"), None);
        assert_eq!(router.dispatch(" !echo leading space"), None);
        assert_eq!(router.dispatch("!ECHO shout"), None);
        assert_eq!(router.dispatch("<@43> !vcjoin"), None);
        assert_eq!(router.dispatch("!vcjoin"), None);
        assert_eq!(router.dispatch("<@42>  !vcjoin"), None);
    }

    #[test]
    fn test_dispatch_is_plain_prefix_match() {
        assert_eq!(router().dispatch("!echoes"), Some(Command::Echo));
        assert_eq!(router().dispatch("!pubgx"), Some(Command::Pubg));
    }

    #[test]
    fn test_settings_from_config() {
        let mut config = Config::default();
        config.discord.client_id = UserId(5);
        config.tracker.log_recent_match = true;

        let settings = RouterSettings::from_config(&config);
        assert_eq!(settings.self_id, UserId(5));
        assert_eq!(settings.voice_channel_id, None);
        assert!(settings.log_recent_match);
    }
}
