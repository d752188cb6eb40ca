//! Telegram transport backed by teloxide.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{
    CallbackQueryId, InlineKeyboardButton, InlineKeyboardMarkup, MessageId, ParseMode,
};

use super::router::{CallbackEvent, Event, MessageEvent};
use super::transport::{Keyboard, SendError, Transport};

/// [`Transport`] implementation over the Telegram Bot API.
#[derive(Clone)]
pub struct TelegramTransport {
    bot: Bot,
}

impl TelegramTransport {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Transport for TelegramTransport {
    async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: Option<Keyboard>,
    ) -> Result<(), SendError> {
        let mut request = self
            .bot
            .send_message(ChatId(chat_id), text)
            .parse_mode(ParseMode::Markdown);
        if let Some(keyboard) = keyboard {
            request = request.reply_markup(convert_keyboard(&keyboard));
        }
        request.await.map_err(|e| SendError(e.to_string()))?;
        Ok(())
    }

    async fn edit_message(
        &self,
        chat_id: i64,
        message_id: i32,
        text: &str,
        keyboard: Option<Keyboard>,
    ) -> Result<(), SendError> {
        let mut request = self
            .bot
            .edit_message_text(ChatId(chat_id), MessageId(message_id), text)
            .parse_mode(ParseMode::Markdown);
        if let Some(keyboard) = keyboard {
            request = request.reply_markup(convert_keyboard(&keyboard));
        }
        request.await.map_err(|e| SendError(e.to_string()))?;
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<(), SendError> {
        self.bot
            .answer_callback_query(CallbackQueryId(callback_id.to_string()))
            .await
            .map_err(|e| SendError(e.to_string()))?;
        Ok(())
    }
}

/// Convert the transport keyboard to teloxide markup.
fn convert_keyboard(keyboard: &Keyboard) -> InlineKeyboardMarkup {
    let rows: Vec<Vec<InlineKeyboardButton>> = keyboard
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|button| InlineKeyboardButton::callback(&button.text, &button.action))
                .collect()
        })
        .collect();
    InlineKeyboardMarkup::new(rows)
}

// ============================================================================
// Event extraction
// ============================================================================

/// Reduce an incoming Telegram message to a routable event.
///
/// Messages without text (media, service messages) are ignored.
pub fn event_from_message(msg: &Message) -> Option<Event> {
    let text = msg.text()?;
    Some(Event::Message(MessageEvent {
        chat_id: msg.chat.id.0,
        text: text.to_string(),
    }))
}

/// Reduce a callback query to a routable event.
///
/// Queries without a payload or an originating message are ignored.
pub fn event_from_callback(query: &CallbackQuery) -> Option<Event> {
    let data = query.data.as_ref()?;
    let message = query.message.as_ref()?;
    Some(Event::Callback(CallbackEvent {
        callback_id: query.id.to_string(),
        chat_id: message.chat().id.0,
        message_id: message.id().0,
        data: data.clone(),
    }))
}
