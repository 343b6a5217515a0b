use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use teloxide::prelude::*;
use teloxide::update_listeners::webhooks;
use teloxide::update_listeners::Polling;

use motivagion::core::{config, web_server};
use motivagion::download::YtdlpFetcher;
use motivagion::telegram::{create_bot, schema, setup_bot_commands, HandlerDeps};

/// Main entry point for the Telegram bot
///
/// # Errors
/// Returns an error if initialization fails (bot creation, webhook setup).
#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env if present
    let _ = dotenv();

    pretty_env_logger::init_timed();

    if config::BOT_TOKEN.is_empty() {
        anyhow::bail!("BOT_TOKEN environment variable not set");
    }

    log::info!("Starting bot...");

    let bot = create_bot()?;
    setup_bot_commands(&bot).await?;

    // Liveness endpoint for deployment platforms, optional
    if let Some(health_port) = *config::HEALTH_PORT {
        tokio::spawn(async move {
            if let Err(e) = web_server::start_health_server(health_port).await {
                log::error!("Liveness server error: {}", e);
            }
        });
    }

    let fetcher = Arc::new(YtdlpFetcher::from_env());
    log::info!("Downloads go to {}", fetcher.download_dir().display());

    let handler = schema(HandlerDeps::new(fetcher));

    if let Some(webhook_base) = config::WEBHOOK_URL.clone() {
        run_webhook(bot, handler, &webhook_base).await
    } else {
        run_polling(bot, handler).await
    }
}

/// Webhook mode: Telegram pushes updates to our HTTP endpoint.
///
/// The update path includes the bot token so strangers cannot feed us
/// fake updates.
async fn run_webhook(
    bot: Bot,
    handler: teloxide::dispatching::UpdateHandler<motivagion::telegram::HandlerError>,
    webhook_base: &str,
) -> Result<()> {
    let port = *config::WEBHOOK_PORT;
    log::info!("Starting webhook mode on port {}...", port);

    let addr = ([0, 0, 0, 0], port).into();
    let url = url::Url::parse(&format!(
        "{}/{}",
        webhook_base.trim_end_matches('/'),
        &*config::BOT_TOKEN
    ))?;

    let listener = webhooks::axum(bot.clone(), webhooks::Options::new(addr, url))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to set up webhook listener: {}", e))?;

    Dispatcher::builder(bot, handler)
        .dependencies(DependencyMap::new())
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    Ok(())
}

/// Long polling mode (default).
async fn run_polling(
    bot: Bot,
    handler: teloxide::dispatching::UpdateHandler<motivagion::telegram::HandlerError>,
) -> Result<()> {
    log::info!("Starting polling mode...");

    // Drop updates that piled up while the bot was down
    let listener = Polling::builder(bot.clone()).drop_pending_updates().build();

    Dispatcher::builder(bot, handler)
        .dependencies(DependencyMap::new())
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    Ok(())
}
