//! Poise framework setup and gateway event routing.

use crate::{discord::SerenitySession, router::CommandRouter, session::InboundMessage};
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::info;
use yamato_common::{ChannelId, GuildId};

/// Application data accessible in all event handlers.
pub struct Data {
    /// Message router.
    pub router: Arc<CommandRouter>,
}

/// Application error type for commands.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Command context type.
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Creates a new Poise framework.
///
/// Commands are plain-text prefixes matched by [`CommandRouter`], so poise's
/// own prefix parsing is switched off and every message is routed from the
/// event handler instead.
pub fn create_framework() -> poise::FrameworkBuilder<Data, Error> {
    poise::Framework::builder().options(poise::FrameworkOptions {
        commands: Vec::new(),
        prefix_options: poise::PrefixFrameworkOptions {
            prefix: None,
            mention_as_prefix: false,
            ..Default::default()
        },
        event_handler: |ctx, event, framework, data| {
            Box::pin(event_handler(ctx, event, framework, data))
        },
        ..Default::default()
    })
}

async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    match event {
        serenity::FullEvent::Ready { data_about_bot } => {
            info!("Logged in as {}", data_about_bot.user.name);
        }
        serenity::FullEvent::Message { new_message } => {
            let session = SerenitySession::new(ctx);
            data.router
                .handle(&session, &inbound_message(new_message))
                .await;
        }
        _ => {}
    }
    Ok(())
}

/// Converts a gateway message into the router's view of it.
pub fn inbound_message(message: &serenity::Message) -> InboundMessage {
    InboundMessage {
        content: message.content.clone(),
        author_name: message.author.name.clone(),
        author_is_bot: message.author.bot,
        channel_id: ChannelId(message.channel_id.get()),
        guild_id: message.guild_id.map(|id| GuildId(id.get())),
    }
}
