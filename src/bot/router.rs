//! Inbound event routing: authorize, classify, dispatch.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::config::Config;
use crate::pm2::{ProcessManager, StartOptions, model};

use super::action::Action;
use super::transport::{Keyboard, Transport};
use super::view;

// ============================================================================
// Events
// ============================================================================

/// A plain text message from the transport.
#[derive(Debug, Clone)]
pub struct MessageEvent {
    pub chat_id: i64,
    pub text: String,
}

/// A pressed keyboard button, tied to the message that carried the keyboard.
#[derive(Debug, Clone)]
pub struct CallbackEvent {
    pub callback_id: String,
    pub chat_id: i64,
    pub message_id: i32,
    pub data: String,
}

/// One inbound transport event.
#[derive(Debug, Clone)]
pub enum Event {
    Message(MessageEvent),
    Callback(CallbackEvent),
}

impl Event {
    fn chat_id(&self) -> i64 {
        match self {
            Event::Message(message) => message.chat_id,
            Event::Callback(callback) => callback.chat_id,
        }
    }
}

// ============================================================================
// Router
// ============================================================================

/// Routes one event at a time: authorization first, then command or
/// callback dispatch.
///
/// Holds no per-conversation state; every transition is derived from the
/// event alone plus a fresh pm2 fetch, so concurrent events and restarts
/// cannot corrupt anything.
pub struct Router {
    admin_chat_id: i64,
    pub(super) manager: Arc<dyn ProcessManager>,
    pub(super) transport: Arc<dyn Transport>,
}

impl Router {
    pub fn new(
        config: &Config,
        manager: Arc<dyn ProcessManager>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            admin_chat_id: config.admin_chat_id,
            manager,
            transport,
        }
    }

    /// Handle one inbound event.
    ///
    /// Events from any chat other than the configured operator are dropped
    /// with no reply, no acknowledgment, and no log line.
    pub async fn handle_event(&self, event: Event) {
        if event.chat_id() != self.admin_chat_id {
            return;
        }

        match event {
            Event::Message(message) => self.handle_message(message).await,
            Event::Callback(callback) => self.handle_callback(callback).await,
        }
    }

    async fn handle_message(&self, message: MessageEvent) {
        let args: Vec<&str> = message.text.split_whitespace().collect();
        let Some(&command) = args.first() else {
            return;
        };

        match command {
            "/start" | "/menu" | "/help" => {
                self.send(
                    message.chat_id,
                    view::MAIN_MENU_PROMPT,
                    Some(view::main_menu_keyboard()),
                )
                .await;
            }
            "/list" => self.send_process_list(message.chat_id).await,
            "/startapp" => self.handle_startapp(message.chat_id, &args).await,
            _ => {
                debug!(command, "ignoring unknown command");
            }
        }
    }

    async fn handle_callback(&self, callback: CallbackEvent) {
        // Clear the pending-indicator before dispatching, whatever the
        // outcome.
        if let Err(err) = self.transport.answer_callback(&callback.callback_id).await {
            warn!(error = %err, "failed to answer callback query");
        }

        let Some(action) = Action::decode(&callback.data) else {
            debug!(data = %callback.data, "ignoring unknown callback token");
            return;
        };

        self.handle_action(callback.chat_id, callback.message_id, action)
            .await;
    }

    async fn send_process_list(&self, chat_id: i64) {
        let text = match self.manager.list_json().await {
            Ok(json) => match model::parse_list(&json) {
                Ok(records) => model::format_list(&records),
                Err(err) => {
                    error!(error = %err, "pm2 returned unparseable status output");
                    view::LIST_PARSE_FAILURE.to_string()
                }
            },
            Err(err) => view::listing_error_text(&err),
        };
        self.send(chat_id, &text, None).await;
    }

    async fn handle_startapp(&self, chat_id: i64, args: &[&str]) {
        if args.len() < 4 {
            self.send(chat_id, view::STARTAPP_USAGE, None).await;
            return;
        }

        let options = StartOptions {
            script: args[1].to_string(),
            name: Some(args[2].to_string()),
            interpreter: Some(args[3].to_string()),
            extra_args: args[4..].iter().map(|s| s.to_string()).collect(),
        };

        let result = self.manager.start(&options).await;
        self.finish_operation(chat_id, result).await;
    }

    /// Best-effort send; failures are logged and never abort the handler.
    pub(super) async fn send(&self, chat_id: i64, text: &str, keyboard: Option<Keyboard>) {
        if let Err(err) = self.transport.send_message(chat_id, text, keyboard).await {
            warn!(error = %err, "failed to send message");
        }
    }

    /// Best-effort in-place edit; same policy as [`Router::send`].
    pub(super) async fn edit(
        &self,
        chat_id: i64,
        message_id: i32,
        text: &str,
        keyboard: Option<Keyboard>,
    ) {
        if let Err(err) = self
            .transport
            .edit_message(chat_id, message_id, text, keyboard)
            .await
        {
            warn!(error = %err, "failed to edit message");
        }
    }
}
