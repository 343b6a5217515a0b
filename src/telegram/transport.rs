//! Telegram implementation of the delivery workflow's chat transport.

use std::path::Path;

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{InputFile, LinkPreviewOptions, MessageId, ParseMode};

use crate::core::error::AppError;
use crate::download::deliver::{source_caption, ChatTransport, MessageRef};

/// A bot bound to one chat. Cheap to construct per command invocation.
pub struct TelegramChat {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramChat {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }
}

#[async_trait]
impl ChatTransport for TelegramChat {
    async fn send_text(&self, text: &str) -> Result<MessageRef, AppError> {
        // Status messages quote the source URL; suppress the link preview
        let msg = self
            .bot
            .send_message(self.chat_id, text)
            .link_preview_options(LinkPreviewOptions {
                is_disabled: true,
                url: None,
                prefer_small_media: false,
                prefer_large_media: false,
                show_above_text: false,
            })
            .await?;
        Ok(msg.id.0)
    }

    async fn send_video(&self, path: &Path, source_url: &str) -> Result<(), AppError> {
        self.bot
            .send_video(self.chat_id, InputFile::file(path))
            .caption(source_caption(source_url))
            .parse_mode(ParseMode::Html)
            .await?;
        Ok(())
    }

    async fn delete_message(&self, message: MessageRef) -> Result<(), AppError> {
        self.bot.delete_message(self.chat_id, MessageId(message)).await?;
        Ok(())
    }
}
