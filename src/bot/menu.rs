//! Menu transitions driven by decoded action tokens.
//!
//! There is no stored menu state: each transition is a pure function of the
//! token plus a fresh pm2 fetch, applied to whichever message the token
//! arrived on. Token-driven transitions edit that message in place;
//! finished control operations post their result and a fresh main menu as
//! new messages.

use tracing::error;

use crate::pm2::{Pm2Error, model};

use super::action::{Action, ProcessAction};
use super::router::Router;
use super::view;

impl Router {
    pub(super) async fn handle_action(&self, chat_id: i64, message_id: i32, action: Action) {
        match action {
            Action::ShowList => self.show_list(chat_id, message_id).await,
            Action::ShowMenu => {
                self.edit(
                    chat_id,
                    message_id,
                    view::MAIN_MENU_TITLE,
                    Some(view::main_menu_keyboard()),
                )
                .await;
            }
            Action::Select(operation) => self.show_selection(chat_id, message_id, operation).await,
            Action::Run(operation, name) => self.run_operation(chat_id, operation, &name).await,
        }
    }

    async fn show_list(&self, chat_id: i64, message_id: i32) {
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
        self.edit(chat_id, message_id, &text, Some(view::list_keyboard()))
            .await;
    }

    async fn show_selection(&self, chat_id: i64, message_id: i32, operation: ProcessAction) {
        let json = match self.manager.list_json().await {
            Ok(json) => json,
            Err(err) => {
                self.edit(
                    chat_id,
                    message_id,
                    &view::listing_error_text(&err),
                    Some(view::cancel_keyboard()),
                )
                .await;
                return;
            }
        };

        let records = match model::parse_list(&json) {
            Ok(records) => records,
            Err(err) => {
                error!(error = %err, "pm2 returned unparseable status output");
                self.edit(
                    chat_id,
                    message_id,
                    view::SELECTION_PARSE_FAILURE,
                    Some(view::cancel_keyboard()),
                )
                .await;
                return;
            }
        };

        self.edit(
            chat_id,
            message_id,
            &view::selection_title(operation),
            Some(view::selection_keyboard(&records, operation)),
        )
        .await;
    }

    async fn run_operation(&self, chat_id: i64, operation: ProcessAction, name: &str) {
        let result = match operation {
            ProcessAction::Restart => self.manager.restart(name).await,
            ProcessAction::Stop => self.manager.stop(name).await,
        };
        self.finish_operation(chat_id, result).await;
    }

    /// Post the ✅/❌ result, then re-open the main menu so the control
    /// surface never dead-ends.
    pub(super) async fn finish_operation(&self, chat_id: i64, result: Result<String, Pm2Error>) {
        self.send(chat_id, &view::result_text(&result), None).await;
        self.send(chat_id, view::MAIN_MENU_TITLE, Some(view::main_menu_keyboard()))
            .await;
    }
}
