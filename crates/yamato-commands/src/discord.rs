//! [`ChatSession`] over a live serenity connection, with songbird for voice.

use crate::{embed::Embed, session::ChatSession};
use async_trait::async_trait;
use poise::serenity_prelude as serenity;
use songbird::{CoreEvent, Event, EventContext, EventHandler as VoiceEventHandler, Songbird};
use std::sync::Arc;
use tracing::debug;
use yamato_common::{ChannelId, GuildId, YamatoError, YamatoResult};

/// A chat session bound to one gateway event's context.
pub struct SerenitySession<'a> {
    ctx: &'a serenity::Context,
}

impl<'a> SerenitySession<'a> {
    /// Wraps an event context.
    pub const fn new(ctx: &'a serenity::Context) -> Self {
        Self { ctx }
    }

    async fn voice_manager(&self) -> YamatoResult<Arc<Songbird>> {
        songbird::get(self.ctx)
            .await
            .ok_or_else(|| YamatoError::voice("Songbird voice client not registered"))
    }
}

fn channel(id: ChannelId) -> serenity::ChannelId {
    serenity::ChannelId::new(id.0)
}

fn guild(id: GuildId) -> serenity::GuildId {
    serenity::GuildId::new(id.0)
}

#[async_trait]
impl ChatSession for SerenitySession<'_> {
    async fn send_message(&self, channel_id: ChannelId, content: &str) -> YamatoResult<()> {
        channel(channel_id)
            .say(&self.ctx.http, content)
            .await
            .map(|_| ())
            .map_err(|e| YamatoError::discord_with_source("Failed to send message", e))
    }

    async fn send_embed(&self, channel_id: ChannelId, embed: &Embed) -> YamatoResult<()> {
        let message = serenity::CreateMessage::new().embed(embed.into());
        channel(channel_id)
            .send_message(&self.ctx.http, message)
            .await
            .map(|_| ())
            .map_err(|e| YamatoError::discord_with_source("Failed to send embed", e))
    }

    async fn join_voice(&self, guild_id: GuildId, channel_id: ChannelId) -> YamatoResult<()> {
        let manager = self.voice_manager().await?;
        let call = manager
            .join(guild(guild_id), channel(channel_id))
            .await
            .map_err(|e| YamatoError::voice(format!("Failed to join voice channel: {e}")))?;

        let mut handler = call.lock().await;
        handler.remove_all_global_events();
        handler.add_global_event(
            Event::Core(CoreEvent::SpeakingStateUpdate),
            VoiceActivityLogger::new(guild_id),
        );
        Ok(())
    }

    async fn leave_voice(&self, guild_id: GuildId) -> YamatoResult<()> {
        self.voice_manager()
            .await?
            .remove(guild(guild_id))
            .await
            .map_err(|e| YamatoError::voice(format!("Failed to leave voice channel: {e}")))
    }
}

/// Logs speaking state changes on a voice connection.
#[derive(Debug, Clone, Copy)]
pub struct VoiceActivityLogger {
    guild_id: GuildId,
}

impl VoiceActivityLogger {
    /// A logger for connections in `guild_id`.
    pub const fn new(guild_id: GuildId) -> Self {
        Self { guild_id }
    }
}

#[async_trait]
impl VoiceEventHandler for VoiceActivityLogger {
    async fn act(&self, ctx: &EventContext<'_>) -> Option<Event> {
        if let EventContext::SpeakingStateUpdate(speaking) = ctx {
            debug!(
                guild_id = %self.guild_id,
                ssrc = speaking.ssrc,
                user_id = ?speaking.user_id,
                "Voice activity"
            );
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_conversion() {
        assert_eq!(channel(ChannelId(7)).get(), 7);
        assert_eq!(guild(GuildId(9)).get(), 9);
    }

    #[test]
    fn test_embed_conversion_compiles_to_builder() {
        let embed = Embed::new().title("t").field("a", "b").inline_all_fields();
        let _builder: serenity::CreateEmbed = (&embed).into();
    }
}
