//! Core bot logic using the Poise framework.

use crate::error::BotResult;
use poise::serenity_prelude as serenity;
use songbird::SerenityInit;
use std::sync::Arc;
use tracing::{info, warn};
use yamato_commands::{create_framework, CommandRouter, Data, RouterSettings};
use yamato_config::Config;
use yamato_i18n::{Locale, ReplyCatalog};
use yamato_tracker::StatsClient;

/// Main bot structure.
pub struct YamatoBot {
    config: Arc<Config>,
    router: Arc<CommandRouter>,
}

impl YamatoBot {
    /// Creates a new bot instance.
    ///
    /// Everything that can be checked before connecting is checked here: the
    /// tracker base URL, the reply locale and its message catalog.
    pub fn new(config: Config) -> BotResult<Self> {
        let router = Arc::new(build_router(&config)?);
        Ok(Self {
            config: Arc::new(config),
            router,
        })
    }

    /// The router messages are dispatched to.
    pub fn router(&self) -> Arc<CommandRouter> {
        Arc::clone(&self.router)
    }

    /// Connects to Discord and runs until the gateway closes or a shutdown
    /// signal arrives.
    pub async fn start(&self) -> BotResult<()> {
        let router = Arc::clone(&self.router);

        let framework = create_framework()
            .setup(move |_ctx, ready, _framework| {
                Box::pin(async move {
                    info!(
                        "Connected as {} in {} guilds",
                        ready.user.name,
                        ready.guilds.len()
                    );
                    Ok(Data { router })
                })
            })
            .build();

        let mut client = serenity::ClientBuilder::new(&self.config.discord.token, intents())
            .framework(framework)
            .register_songbird()
            .await?;

        let shard_manager = Arc::clone(&client.shard_manager);
        tokio::spawn(async move {
            wait_for_shutdown().await;
            info!("Shutdown signal received, stopping shards");
            shard_manager.shutdown_all().await;
        });

        info!("Listening...");
        client.start().await?;
        Ok(())
    }
}

/// Builds the command router from configuration.
pub fn build_router(config: &Config) -> BotResult<CommandRouter> {
    let stats = StatsClient::new(config.tracker.api_key.clone(), &config.tracker.base_url)?;
    let locale: Locale = config.locale.parse()?;
    let replies = ReplyCatalog::load(locale)?;
    info!("Replying in locale {}", locale);

    if config.discord.voice_channel_id.is_none() {
        warn!("No voice channel configured, voice commands will be ignored");
    }

    Ok(CommandRouter::new(
        RouterSettings::from_config(config),
        Arc::new(stats),
        Arc::new(replies),
    ))
}

/// Gateway intents: guild and direct messages with their content, plus
/// voice states for songbird.
pub fn intents() -> serenity::GatewayIntents {
    serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::DIRECT_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT
        | serenity::GatewayIntents::GUILD_VOICE_STATES
}

async fn wait_for_shutdown() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yamato_common::{ChannelId, UserId};

    fn config() -> Config {
        let mut config = Config::default();
        config.discord.token = "token".to_string();
        config.discord.client_id = UserId(42);
        config.discord.voice_channel_id = Some(ChannelId(7));
        config.tracker.api_key = "key".to_string();
        config
    }

    #[test]
    fn test_intents_include_message_content_and_voice() {
        let intents = intents();
        assert!(intents.contains(serenity::GatewayIntents::MESSAGE_CONTENT));
        assert!(intents.contains(serenity::GatewayIntents::GUILD_VOICE_STATES));
        assert!(intents.contains(serenity::GatewayIntents::GUILD_MESSAGES));
    }

    #[test]
    fn test_build_router_routes_mentions_of_configured_id() {
        let router = build_router(&config()).unwrap();
        assert!(router.dispatch("<@42> !vcjoin").is_some());
        assert!(router.dispatch("<@43> !vcjoin").is_none());
    }

    #[test]
    fn test_unknown_locale_fails_setup() {
        let mut config = config();
        config.locale = "xx".to_string();
        assert!(build_router(&config).is_err());
    }

    #[test]
    fn test_bot_new_rejects_bad_base_url() {
        let mut config = config();
        config.tracker.base_url = "not a url".to_string();
        assert!(YamatoBot::new(config).is_err());
    }
}
