//! The messaging capability command handlers act through.

use crate::embed::Embed;
use async_trait::async_trait;
use tracing::{error, info};
use yamato_common::{ChannelId, GuildId, YamatoResult};

/// A chat message as the router sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    /// Raw message text.
    pub content: String,
    /// Display name of the author, for logging.
    pub author_name: String,
    /// Whether the author is a bot account.
    pub author_is_bot: bool,
    /// Channel the message was posted in; replies go here.
    pub channel_id: ChannelId,
    /// Guild the channel belongs to, `None` for direct messages.
    pub guild_id: Option<GuildId>,
}

/// Outbound side of a chat connection.
#[async_trait]
pub trait ChatSession: Send + Sync {
    /// Posts a plain text message.
    async fn send_message(&self, channel_id: ChannelId, content: &str) -> YamatoResult<()>;

    /// Posts a rich embed.
    async fn send_embed(&self, channel_id: ChannelId, embed: &Embed) -> YamatoResult<()>;

    /// Connects to a voice channel, moving the guild's existing connection if any.
    async fn join_voice(&self, guild_id: GuildId, channel_id: ChannelId) -> YamatoResult<()>;

    /// Disconnects the guild's voice connection.
    async fn leave_voice(&self, guild_id: GuildId) -> YamatoResult<()>;
}

/// Sends `content`, logging it and any failure. Never fails.
pub async fn send_message(session: &dyn ChatSession, channel_id: ChannelId, content: &str) {
    let result = session.send_message(channel_id, content).await;

    info!(channel_id = %channel_id, ">>> {}", content);
    if let Err(e) = result {
        error!("Error sending message: {}", e);
    }
}

/// Sends `embed`, logging its title and any failure. Never fails.
pub async fn send_embed(session: &dyn ChatSession, channel_id: ChannelId, embed: &Embed) {
    let result = session.send_embed(channel_id, embed).await;

    info!(
        channel_id = %channel_id,
        ">>> {}",
        embed.title.as_deref().unwrap_or_default()
    );
    if let Err(e) = result {
        error!("Error sending embed: {}", e);
    }
}
