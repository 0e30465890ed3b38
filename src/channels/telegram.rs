//! Telegram delivery through the Bot API.

use async_trait::async_trait;
use teloxide::prelude::Requester;
use teloxide::types::ChatId;
use teloxide::Bot;

use super::{Channel, DeliveryError};

pub struct TelegramChannel {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramChannel {
    pub fn new(token: &str, chat_id: i64) -> Self {
        Self {
            bot: Bot::new(token),
            chat_id: ChatId(chat_id),
        }
    }
}

#[async_trait]
impl Channel for TelegramChannel {
    async fn send(&self, text: &str) -> Result<(), DeliveryError> {
        self.bot.send_message(self.chat_id, text).await?;
        Ok(())
    }
}
