//! MiBiciBot Telegram Bot
//!
//! Main application entry point

use std::sync::Arc;
use anyhow::Context;
use teloxide::{prelude::*, types::{CallbackQuery, Update}};
use teloxide::dispatching::UpdateHandler;
use teloxide::utils::command::BotCommands;
use tracing::{debug, info, warn};

use MiBiciBot::{
    config::Settings,
    handlers::{commands::Command, EventDispatcher, InboundEvent},
    state::AppContext,
    transport::{telegram, TelegramTransport},
    utils::logging,
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("Failed to load configuration")?;
    settings.validate().context("Invalid configuration")?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", MiBiciBot::info());
    info!(api = %settings.api.base_url, radius = settings.api.default_radius, limit = settings.api.default_limit, "Stations API configured");

    let ctx = AppContext::from_settings(settings.clone())
        .await
        .context("Failed to initialize services")?;
    let dispatcher = Arc::new(EventDispatcher::new(ctx));

    let bot = Bot::new(&settings.bot.token);
    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to register bot commands");
    }

    // Updates are distributed per chat: one chat is handled in order,
    // different chats concurrently.
    Dispatcher::builder(bot, create_handler())
        .dependencies(dptree::deps![dispatcher])
        .default_handler(|upd| async move {
            debug!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("MiBiciBot has been shut down.");
    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    dptree::entry()
        .branch(
            Update::filter_message()
                .branch(
                    dptree::entry()
                        .filter_command::<Command>()
                        .endpoint(handle_command),
                )
                .branch(dptree::endpoint(handle_message)),
        )
        .branch(Update::filter_callback_query().endpoint(handle_callback))
}

/// Handle /start, /cancel and /help
async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    dispatcher: Arc<EventDispatcher>,
) -> HandlerResult {
    let Some(user) = msg.from.as_ref() else {
        return Ok(());
    };

    let transport = TelegramTransport::new(bot, msg.chat.id);
    dispatcher
        .dispatch(user.id.0 as i64, telegram::event_from_command(cmd), &transport)
        .await;
    Ok(())
}

/// Handle locations and free text
async fn handle_message(bot: Bot, msg: Message, dispatcher: Arc<EventDispatcher>) -> HandlerResult {
    let (Some(user), Some(event)) = (msg.from.as_ref(), telegram::event_from_message(&msg)) else {
        return Ok(());
    };

    let transport = TelegramTransport::new(bot, msg.chat.id);
    dispatcher.dispatch(user.id.0 as i64, event, &transport).await;
    Ok(())
}

/// Handle inline keyboard choices
async fn handle_callback(bot: Bot, query: CallbackQuery, dispatcher: Arc<EventDispatcher>) -> HandlerResult {
    let user_id = query.from.id.0 as i64;

    // Answer first to remove the loading state on the button
    if let Err(e) = bot.answer_callback_query(query.id.clone()).await {
        warn!(user_id = user_id, error = %e, "Failed to answer callback query");
    }

    let Some(event) = telegram::event_from_callback(&query) else {
        return Ok(());
    };
    let chat_id = query
        .message
        .as_ref()
        .map(|m| m.chat().id)
        .unwrap_or(ChatId(user_id));

    let transport = TelegramTransport::new(bot, chat_id);
    if let InboundEvent::ButtonChoice(payload) = &event {
        debug!(user_id = user_id, payload = %payload, "Callback query received");
    }
    dispatcher.dispatch(user_id, event, &transport).await;
    Ok(())
}
