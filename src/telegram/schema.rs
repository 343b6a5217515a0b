//! Dispatcher schema and handler chain builders

use std::sync::Arc;

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use crate::core::sources::get_sources;
use crate::download::deliver::{deliver_random_video, UniformPicker};
use crate::download::fetcher::YtdlpFetcher;
use crate::telegram::bot::Command;
use crate::telegram::transport::TelegramChat;

/// Error type produced by the handler tree.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies shared by all handlers.
#[derive(Clone)]
pub struct HandlerDeps {
    pub fetcher: Arc<YtdlpFetcher>,
}

impl HandlerDeps {
    pub fn new(fetcher: Arc<YtdlpFetcher>) -> Self {
        Self { fetcher }
    }
}

/// Creates the main dispatcher schema for the Telegram bot.
///
/// The same schema is used in production and in integration tests.
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    dptree::entry().branch(command_handler(deps))
}

/// Handler for bot commands (/start, /motivate)
fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::entry().filter_command::<Command>().endpoint(
        move |bot: Bot, msg: Message, cmd: Command| {
            let deps = deps.clone();
            async move {
                log::info!("Received command: {:?} from chat {}", cmd, msg.chat.id);

                match cmd {
                    Command::Start => {
                        bot.send_message(
                            msg.chat.id,
                            "Welcome! 🚀\nI'm a minimalist motivation bot.\nUse /motivate to get a random video from my sources.",
                        )
                        .await?;
                    }
                    Command::Motivate => {
                        // Long-running: run outside the dispatcher so other
                        // chats are not blocked behind this download
                        let chat_id = msg.chat.id;
                        let fetcher = Arc::clone(&deps.fetcher);
                        tokio::spawn(async move {
                            let sources = get_sources();
                            let transport = TelegramChat::new(bot, chat_id);
                            let mut picker = UniformPicker;
                            let outcome =
                                deliver_random_video(&transport, fetcher.as_ref(), &mut picker, &sources).await;
                            log::info!("Delivery for chat {} finished: {:?}", chat_id, outcome);
                        });
                    }
                }
                Ok(())
            }
        },
    ))
}
