//! Outbound rendering seam.
//!
//! The menu produces plain data (text plus [`Keyboard`] rows); a
//! [`Transport`] implementation turns that into platform messages. Keeping
//! the seam here lets tests record renders without touching the Telegram
//! API.

use async_trait::async_trait;
use thiserror::Error;

/// Inline keyboard attached to a rendered message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyboard {
    /// Rows of buttons.
    pub rows: Vec<Vec<Button>>,
}

/// A single selectable control element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    /// Label displayed to the operator.
    pub text: String,
    /// Action token sent back when pressed.
    pub action: String,
}

impl Button {
    pub fn new(text: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: action.into(),
        }
    }
}

/// Best-effort send failure. Never retried; a failed render does not abort
/// the handler.
#[derive(Debug, Error)]
#[error("transport send failed: {0}")]
pub struct SendError(pub String);

/// Messaging transport as seen by the menu: send, edit, acknowledge.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a new message to the chat.
    async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: Option<Keyboard>,
    ) -> Result<(), SendError>;

    /// Edit a previously sent message in place.
    async fn edit_message(
        &self,
        chat_id: i64,
        message_id: i32,
        text: &str,
        keyboard: Option<Keyboard>,
    ) -> Result<(), SendError>;

    /// Clear the pending-indicator on a pressed button.
    async fn answer_callback(&self, callback_id: &str) -> Result<(), SendError>;
}
