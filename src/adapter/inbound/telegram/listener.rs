use std::sync::Arc;

use teloxide::dispatching::UpdateFilterExt;
use teloxide::dptree;
use teloxide::prelude::*;
use teloxide::types::BotCommand;
use teloxide::update_listeners;
use tracing::{error, info, warn};

use crate::application::dispatch::CommandDispatcher;
use crate::domain::{ChatId as DomainChatId, Command};
use crate::error::TransportError;

/// Receives Telegram updates and feeds text messages to the dispatcher.
///
/// Each update is handled in its own task by the `teloxide` dispatcher, so a
/// slow upstream call for one chat does not hold up others.
pub struct TelegramListener {
    bot: Bot,
    dispatcher: Arc<CommandDispatcher>,
    register_commands: bool,
}

impl TelegramListener {
    #[must_use]
    pub fn new(bot: Bot, dispatcher: CommandDispatcher) -> Self {
        Self {
            bot,
            dispatcher: Arc::new(dispatcher),
            register_commands: true,
        }
    }

    /// Whether to publish the "/" command menu on startup.
    #[must_use]
    pub fn register_commands(mut self, enabled: bool) -> Self {
        self.register_commands = enabled;
        self
    }

    /// Poll for updates until Ctrl-C.
    ///
    /// Polling failures are logged and polling continues.
    pub async fn run(self) {
        if self.register_commands {
            if let Err(e) = register_bot_commands(&self.bot).await {
                warn!(error = %e, "Failed to register bot commands with Telegram");
            }
        }

        info!("Telegram command listener started");

        let handler = Update::filter_message().endpoint(handle_message);
        let listener = update_listeners::polling_default(self.bot.clone()).await;

        Dispatcher::builder(self.bot, handler)
            .dependencies(dptree::deps![self.dispatcher])
            .enable_ctrlc_handler()
            .build()
            .dispatch_with_listener(listener, Arc::new(log_polling_error))
            .await;

        info!("Telegram command listener stopped");
    }
}

async fn handle_message(msg: Message, dispatcher: Arc<CommandDispatcher>) -> ResponseResult<()> {
    if let Some(text) = msg.text() {
        dispatcher
            .handle_text(DomainChatId::new(msg.chat.id.0), text)
            .await;
    }
    Ok(())
}

async fn log_polling_error(err: teloxide::RequestError) {
    let err = TransportError::Polling(err.to_string());
    error!(error = %err, "Telegram update listener error");
}

/// Entries for the Telegram "/" menu.
#[must_use]
pub fn bot_commands() -> Vec<BotCommand> {
    Command::ALL
        .into_iter()
        .map(|command| BotCommand::new(command.name(), command.description()))
        .collect()
}

async fn register_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    bot.set_my_commands(bot_commands()).await?;
    info!("Registered bot commands with Telegram");
    Ok(())
}
