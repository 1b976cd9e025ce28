//! Dispatcher runner: converts teloxide messages and callback queries to core::Message and passes
//! them to HandlerChain, each in its own task. Calls get_me first to populate bot_username.

use std::sync::Arc;

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::CallbackQuery;
use teloxide::utils::command::BotCommands;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, warn};

use super::adapters::{TelegramCallbackWrapper, TelegramMessageWrapper};
use crate::chain::HandlerChain;
use crate::commands::Command;
use crate::core::{Bot as CoreBot, Message as CoreMessage, ToCoreMessage};
use crate::replies;

/// Runs the chain for one update in a spawned task so the dispatcher is never blocked by the
/// outbound shortening call. A chain error is logged and turned into a generic notice to the chat.
pub fn spawn_chain(
    chain: HandlerChain,
    bot: Arc<dyn CoreBot>,
    message: CoreMessage,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = chain.handle(&message).await {
            error!(error = %e, user_id = message.user.id, "Handler chain failed");
            if let Err(e) = bot.send_message(&message.chat, replies::GENERIC_FAILURE).await {
                error!(error = %e, chat_id = message.chat.id, "Failed to send failure notice");
            }
        }
    })
}

/// Update tree: text messages and callback queries go to the chain; everything else is dropped.
pub fn schema(
    chain: HandlerChain,
    core_bot: Arc<dyn CoreBot>,
) -> UpdateHandler<teloxide::RequestError> {
    let message_chain = chain.clone();
    let message_bot = core_bot.clone();

    let messages: UpdateHandler<teloxide::RequestError> =
        Update::filter_message().endpoint(move |msg: Message| {
            let chain = message_chain.clone();
            let bot = message_bot.clone();
            async move {
                if msg.text().is_none() {
                    debug!(chat_id = msg.chat.id.0, "Ignoring non-text message");
                    return Ok(());
                }
                let core_msg = TelegramMessageWrapper(&msg).to_core();
                spawn_chain(chain, bot, core_msg);
                Ok(())
            }
        });

    let callbacks: UpdateHandler<teloxide::RequestError> =
        Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
            let chain = chain.clone();
            let core_bot = core_bot.clone();
            async move {
                // Stop the client's loading spinner regardless of what the chain does.
                if let Err(e) = bot.answer_callback_query(q.id.clone()).await {
                    warn!(error = %e, "Failed to answer callback query");
                }
                let core_msg = TelegramCallbackWrapper(&q).to_core();
                spawn_chain(chain, core_bot, core_msg);
                Ok(())
            }
        });

    dptree::entry().branch(messages).branch(callbacks)
}

/// Starts long polling with the given teloxide Bot and HandlerChain.
///
/// Before dispatching: get_me fills `bot_username`, and the command list is registered so
/// clients show it. Failures of either are logged, not fatal. Returns on Ctrl-C.
#[instrument(skip(bot, handler_chain, core_bot, bot_username))]
pub async fn run_dispatcher(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    core_bot: Arc<dyn CoreBot>,
    bot_username: Arc<RwLock<Option<String>>>,
) -> anyhow::Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            if let Some(username) = &me.user.username {
                *bot_username.write().await = Some(username.clone());
                info!(username = %username, "Bot username set before dispatch");
            }
        }
        Err(e) => warn!(error = %e, "get_me failed; /cmd@bot in groups may not parse"),
    }

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to register bot commands");
    }

    Dispatcher::builder(bot, schema(handler_chain, core_bot))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Dispatcher shut down");
    Ok(())
}
