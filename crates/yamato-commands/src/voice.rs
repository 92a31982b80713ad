//! `<mention> !vcjoin` and `<mention> !vcleave`.

use crate::session::ChatSession;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::{error, info, warn};
use yamato_common::{ChannelId, GuildId};

/// Voice channels the bot currently holds, one per guild.
#[derive(Debug, Clone, Default)]
pub struct VoiceRegistry {
    sessions: Arc<DashMap<GuildId, ChannelId>>,
}

impl VoiceRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a connection, returning the channel it replaced.
    pub fn insert(&self, guild_id: GuildId, channel_id: ChannelId) -> Option<ChannelId> {
        self.sessions.insert(guild_id, channel_id)
    }

    /// Forgets a connection, returning its channel.
    pub fn remove(&self, guild_id: GuildId) -> Option<ChannelId> {
        self.sessions.remove(&guild_id).map(|(_, channel_id)| channel_id)
    }

    /// Channel held in `guild_id`, if any.
    pub fn get(&self, guild_id: GuildId) -> Option<ChannelId> {
        self.sessions.get(&guild_id).map(|entry| *entry.value())
    }

    /// Number of guilds with a connection.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no guild has a connection.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// Voice join and leave handlers.
///
/// Commands that cannot be carried out are logged and otherwise ignored:
/// no configured channel, a message outside a guild, or a leave with no
/// connection held.
#[derive(Debug, Clone)]
pub struct VoiceCommands {
    registry: VoiceRegistry,
    channel_id: Option<ChannelId>,
}

impl VoiceCommands {
    /// Creates the handlers. `channel_id` is the channel `!vcjoin` connects to.
    pub const fn new(registry: VoiceRegistry, channel_id: Option<ChannelId>) -> Self {
        Self {
            registry,
            channel_id,
        }
    }

    /// The registry of held connections.
    pub const fn registry(&self) -> &VoiceRegistry {
        &self.registry
    }

    /// Handles `!vcjoin`.
    pub async fn join(&self, session: &dyn ChatSession, guild_id: Option<GuildId>) {
        let Some(channel_id) = self.channel_id else {
            warn!("Ignoring voice join: no voice channel configured");
            return;
        };
        let Some(guild_id) = guild_id else {
            warn!("Ignoring voice join: message was not sent in a guild");
            return;
        };

        match session.join_voice(guild_id, channel_id).await {
            Ok(()) => {
                if let Some(previous) = self.registry.insert(guild_id, channel_id) {
                    info!(guild_id = %guild_id, "Moved voice connection from {}", previous);
                }
                info!(guild_id = %guild_id, "Joined voice channel {}", channel_id);
            }
            Err(e) => error!(
                guild_id = %guild_id,
                "Failed to join voice channel {}: {}", channel_id, e
            ),
        }
    }

    /// Handles `!vcleave`.
    ///
    /// The connection stays registered until the disconnect succeeds, so a
    /// failed leave can be retried.
    pub async fn leave(&self, session: &dyn ChatSession, guild_id: Option<GuildId>) {
        let Some(guild_id) = guild_id else {
            warn!("Ignoring voice leave: message was not sent in a guild");
            return;
        };
        let Some(channel_id) = self.registry.get(guild_id) else {
            info!(guild_id = %guild_id, "Ignoring voice leave: no active voice connection");
            return;
        };

        match session.leave_voice(guild_id).await {
            Ok(()) => {
                self.registry.remove(guild_id);
                info!(guild_id = %guild_id, "Left voice channel {}", channel_id);
            }
            Err(e) => error!(
                guild_id = %guild_id,
                "Failed to leave voice channel {}: {}", channel_id, e
            ),
        }
    }
}
