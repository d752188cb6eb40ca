//! View construction: message texts and keyboards for each menu state.

use crate::pm2::{Pm2Error, ProcessRecord};

use super::action::{Action, ProcessAction};
use super::transport::{Button, Keyboard};

/// Main-menu text used when a new control surface is opened.
pub(super) const MAIN_MENU_PROMPT: &str = "🤖 **PM2 Control Panel**\nSelect an action below:";
/// Main-menu text used when re-rendering an existing surface.
pub(super) const MAIN_MENU_TITLE: &str = "🤖 **PM2 Control Panel**";

pub(super) const LIST_PARSE_FAILURE: &str = "❌ Error parsing process list";
pub(super) const SELECTION_PARSE_FAILURE: &str = "❌ Could not parse process list.";

pub(super) const STARTAPP_USAGE: &str = "Usage: `/startapp <script> <name> <interpreter> [args...]`";

pub(super) fn main_menu_keyboard() -> Keyboard {
    Keyboard {
        rows: vec![
            vec![
                Button::new("📊 Status List", Action::ShowList.encode()),
                Button::new("🔄 Refresh Menu", Action::ShowMenu.encode()),
            ],
            vec![
                Button::new(
                    "🔄 Restart Process",
                    Action::Select(ProcessAction::Restart).encode(),
                ),
                Button::new(
                    "🛑 Stop Process",
                    Action::Select(ProcessAction::Stop).encode(),
                ),
            ],
        ],
    }
}

/// Back/Refresh row shown under the in-place process listing.
pub(super) fn list_keyboard() -> Keyboard {
    Keyboard {
        rows: vec![vec![
            Button::new("🔙 Main Menu", Action::ShowMenu.encode()),
            Button::new("🔄 Refresh", Action::ShowList.encode()),
        ]],
    }
}

/// Lone Cancel row, for selection-flow error renders.
pub(super) fn cancel_keyboard() -> Keyboard {
    Keyboard {
        rows: vec![vec![Button::new("🔙 Cancel", Action::ShowMenu.encode())]],
    }
}

/// One row per process plus a trailing Cancel row.
pub(super) fn selection_keyboard(records: &[ProcessRecord], action: ProcessAction) -> Keyboard {
    let mut rows: Vec<Vec<Button>> = records
        .iter()
        .map(|record| {
            let label = format!("{} ({})", record.name, record.pm_id);
            let token = Action::Run(action, record.name.clone()).encode();
            vec![Button::new(label, token)]
        })
        .collect();
    rows.push(vec![Button::new("🔙 Cancel", Action::ShowMenu.encode())]);
    Keyboard { rows }
}

pub(super) fn selection_title(action: ProcessAction) -> String {
    format!("Select process to **{}**:", action.verb().to_uppercase())
}

/// ✅/❌ result block for a finished control operation.
pub(super) fn result_text(result: &Result<String, Pm2Error>) -> String {
    match result {
        Ok(output) => {
            let output = if output.is_empty() { "Done" } else { output };
            format!("✅ **Success:**\n```\n{}\n```", output)
        }
        Err(err) => format!("❌ **Error:**\n```\n{}\n```", err),
    }
}

/// Inline error used by listing flows.
pub(super) fn listing_error_text(err: &Pm2Error) -> String {
    format!("❌ Error:\n`{}`", err)
}
