//! Opaque action tokens carried by keyboard buttons.
//!
//! A token is `verb` or `verb:target`, split once on the first `:`. The
//! target is everything after that colon, so process names containing `:`
//! survive a round trip unchanged.

/// Control operation that needs a process selected first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessAction {
    Restart,
    Stop,
}

impl ProcessAction {
    pub fn verb(&self) -> &'static str {
        match self {
            ProcessAction::Restart => "restart",
            ProcessAction::Stop => "stop",
        }
    }
}

const DELIMITER: char = ':';

/// Decoded action token.
///
/// Decoding happens once at the router boundary; downstream logic never
/// re-parses raw strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Render the process listing in place.
    ShowList,
    /// Render the main menu in place.
    ShowMenu,
    /// Render the process selection for the given operation.
    Select(ProcessAction),
    /// Run the operation against the named process.
    Run(ProcessAction, String),
}

impl Action {
    /// Encode into the wire token attached to a keyboard button.
    pub fn encode(&self) -> String {
        match self {
            Action::ShowList => "cmd_list".to_string(),
            Action::ShowMenu => "cmd_menu".to_string(),
            Action::Select(ProcessAction::Restart) => "menu_restart".to_string(),
            Action::Select(ProcessAction::Stop) => "menu_stop".to_string(),
            Action::Run(action, name) => format!("do_{}{}{}", action.verb(), DELIMITER, name),
        }
    }

    /// Decode a wire token. Unknown tokens yield `None` and are ignored
    /// upstream.
    pub fn decode(token: &str) -> Option<Self> {
        let (verb, target) = match token.split_once(DELIMITER) {
            Some((verb, target)) => (verb, Some(target)),
            None => (token, None),
        };

        match (verb, target) {
            ("cmd_list", None) => Some(Action::ShowList),
            ("cmd_menu", None) => Some(Action::ShowMenu),
            ("menu_restart", None) => Some(Action::Select(ProcessAction::Restart)),
            ("menu_stop", None) => Some(Action::Select(ProcessAction::Stop)),
            ("do_restart", Some(name)) => {
                Some(Action::Run(ProcessAction::Restart, name.to_string()))
            }
            ("do_stop", Some(name)) => Some(Action::Run(ProcessAction::Stop, name.to_string())),
            _ => None,
        }
    }
}
