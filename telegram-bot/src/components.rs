//! Component factory: builds BotComponents from config. Isolates assembly logic from runner.

use std::sync::Arc;

use anyhow::Result;
use shortener::{ShortenClient, UserStats};
use teloxide::prelude::*;
use tokio::sync::RwLock;
use tracing::{error, info, instrument};

use crate::chain::HandlerChain;
use crate::config::BotConfig;
use crate::core::Bot as CoreBot;
use crate::handlers::{CallbackHandler, CommandHandler, LinkHandler, LoggingHandler, ShortenService};
use crate::telegram::TelegramBotAdapter;

/// Core dependencies for run_bot / ShortenerBot; produced by the component factory.
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: Bot,
    /// Outbound side used by handlers; the Telegram adapter in production, a mock in tests.
    pub core_bot: Arc<dyn CoreBot>,
    pub client: ShortenClient,
    pub stats: Arc<UserStats>,
    pub bot_username: Arc<RwLock<Option<String>>>,
}

/// teloxide Bot for the configured token, pointed at TELEGRAM_API_URL when set.
fn build_teloxide_bot(config: &BotConfig) -> Bot {
    let bot = Bot::new(config.bot_token());
    match config.telegram_api_url() {
        Some(url_str) => match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        },
        None => bot,
    }
}

/// Builds BotComponents. When `core_bot_override` is `Some`, handlers send through it instead
/// of the Telegram adapter.
#[instrument(skip(config, core_bot_override))]
pub fn build_bot_components(
    config: &BotConfig,
    core_bot_override: Option<Arc<dyn CoreBot>>,
) -> Result<BotComponents> {
    let teloxide_bot = build_teloxide_bot(config);
    let core_bot = core_bot_override
        .unwrap_or_else(|| Arc::new(TelegramBotAdapter::new(teloxide_bot.clone())));
    let client = ShortenClient::from_config(config.shortener());

    info!(
        timeout_secs = client.timeout().as_secs(),
        "Shortening client ready"
    );

    Ok(BotComponents {
        teloxide_bot,
        core_bot,
        client,
        stats: Arc::new(UserStats::new()),
        bot_username: Arc::new(RwLock::new(None)),
    })
}

/// Builds the handler chain (logging → commands → keyboard callbacks → free-text links).
pub fn build_handler_chain(components: &BotComponents) -> HandlerChain {
    let service = Arc::new(ShortenService::new(
        components.client.clone(),
        components.stats.clone(),
        components.core_bot.clone(),
    ));
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler::new()))
        .add_handler(Arc::new(CommandHandler::new(
            service.clone(),
            components.bot_username.clone(),
        )))
        .add_handler(Arc::new(CallbackHandler::new(service.clone())))
        .add_handler(Arc::new(LinkHandler::new(service)))
}
