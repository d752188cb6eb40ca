//! Telegram control panel for the pm2 process manager.
//!
//! A single authorized operator drives pm2 through an inline-keyboard menu:
//! listing processes, starting new ones, restarting or stopping existing
//! ones. pm2 itself is invoked as a subprocess with a bounded timeout;
//! nothing is persisted here — every view is rebuilt from the incoming
//! action token plus a fresh status fetch.

pub mod bot;
pub mod config;
pub mod pm2;
