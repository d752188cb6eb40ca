//! Telegram-facing control surface.
//!
//! Incoming updates are reduced to [`Event`]s, authorized against the single
//! configured operator, and dispatched through the menu: action tokens name
//! a view transition or a control operation, and every finished operation is
//! followed by a fresh main menu so the operator is never left without a
//! keyboard.

mod action;
mod menu;
mod router;
pub mod telegram;
mod transport;
mod view;

pub use action::{Action, ProcessAction};
pub use router::{CallbackEvent, Event, MessageEvent, Router};
pub use transport::{Button, Keyboard, SendError, Transport};
