//! Binary entry point: load config, wire the router, run the dispatcher.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pm2_telegram::bot::Router;
use pm2_telegram::bot::telegram::{self, TelegramTransport};
use pm2_telegram::config::Config;
use pm2_telegram::pm2::Pm2Client;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("invalid configuration")?;
    init_tracing(config.debug);

    // HTTP client timeout must exceed the long-polling timeout.
    let client = teloxide::net::default_reqwest_settings()
        .timeout(Duration::from_secs(60))
        .connect_timeout(Duration::from_secs(10))
        .build()
        .context("failed to build HTTP client")?;
    let bot = Bot::with_client(&config.bot_token, client);

    info!(
        admin_chat_id = config.admin_chat_id,
        "pm2 control bot starting; waiting for operator commands"
    );

    let router = Arc::new(Router::new(
        &config,
        Arc::new(Pm2Client::new()),
        Arc::new(TelegramTransport::new(bot.clone())),
    ));

    let message_handler = Update::filter_message().endpoint({
        let router = router.clone();
        move |msg: Message| {
            let router = router.clone();
            async move {
                if let Some(event) = telegram::event_from_message(&msg) {
                    router.handle_event(event).await;
                }
                respond(())
            }
        }
    });

    let callback_handler = Update::filter_callback_query().endpoint({
        let router = router.clone();
        move |query: CallbackQuery| {
            let router = router.clone();
            async move {
                if let Some(event) = telegram::event_from_callback(&query) {
                    router.handle_event(event).await;
                }
                respond(())
            }
        }
    });

    let handler = dptree::entry()
        .branch(message_handler)
        .branch(callback_handler);

    let polling = teloxide::update_listeners::Polling::builder(bot.clone())
        .timeout(Duration::from_secs(30))
        .build();

    let mut dispatcher = Dispatcher::builder(bot, handler).build();
    dispatcher
        .dispatch_with_listener(
            polling,
            teloxide::error_handlers::LoggingErrorHandler::with_custom_text(
                "Telegram polling error (will retry)",
            ),
        )
        .await;

    info!("pm2 control bot stopped");
    Ok(())
}

fn init_tracing(debug: bool) {
    let default = if debug {
        "pm2_telegram=debug,teloxide=info"
    } else {
        "pm2_telegram=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
