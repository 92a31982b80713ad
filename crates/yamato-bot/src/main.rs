//! Main entry point for Yamato Bot.

use anyhow::Context;
use tracing::{error, info};
use yamato_bot::YamatoBot;
use yamato_common::init_logging;
use yamato_config::ConfigLoader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigLoader::from_env()
        .load()
        .context("Failed to load configuration")?;

    init_logging(&config.logging).context("Failed to initialize logging")?;

    info!("Starting Yamato Bot v{}", env!("CARGO_PKG_VERSION"));

    let bot = YamatoBot::new(config).context("Failed to set up bot")?;

    if let Err(e) = bot.start().await {
        error!("Bot stopped with error: {}", e);
        return Err(e.into());
    }

    info!("Bot stopped");
    Ok(())
}
