//! Entry points: build the bot from config and run it, or build it without polling for tests.

use std::sync::Arc;

use anyhow::Result;
use tracing::{error, info, instrument};

use crate::chain::HandlerChain;
use crate::components::{build_bot_components, build_handler_chain, BotComponents};
use crate::config::BotConfig;
use crate::core::{init_tracing, Bot, HandlerResponse, Message as CoreMessage};
use crate::telegram::run_dispatcher;

/// ShortenerBot: config, components, and handler chain.
pub struct ShortenerBot {
    pub config: BotConfig,
    pub components: BotComponents,
    pub handler_chain: HandlerChain,
}

impl ShortenerBot {
    /// Builds components and the handler chain; sends through Telegram.
    pub fn new(config: BotConfig) -> Result<Self> {
        Self::build(config, None)
    }

    /// Same as [`ShortenerBot::new`] but handlers send through `bot` (e.g. a recording mock).
    pub fn with_bot(config: BotConfig, bot: Arc<dyn Bot>) -> Result<Self> {
        Self::build(config, Some(bot))
    }

    fn build(config: BotConfig, bot: Option<Arc<dyn Bot>>) -> Result<Self> {
        let components = build_bot_components(&config, bot)?;
        let handler_chain = build_handler_chain(&components);
        Ok(Self {
            config,
            components,
            handler_chain,
        })
    }

    /// Drives the handler chain with a core Message and returns its final response.
    pub async fn handle_core_message(&self, message: &CoreMessage) -> Result<HandlerResponse> {
        match self.handler_chain.handle(message).await {
            Ok(response) => Ok(response),
            Err(e) => {
                error!(error = %e, user_id = message.user.id, "Handler chain failed");
                Err(e.into())
            }
        }
    }
}

/// Main entry: validate config, init logging, build components, then poll until Ctrl-C.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        shortener_timeout_secs = config.shortener().timeout().as_secs(),
        custom_api_url = config.telegram_api_url().is_some(),
        "Initializing bot"
    );

    let bot = ShortenerBot::new(config)?;
    let components = bot.components.clone();

    info!("Bot started successfully");

    run_dispatcher(
        components.teloxide_bot,
        bot.handler_chain,
        components.core_bot,
        components.bot_username,
    )
    .await
}
