//! Shared fakes for router integration tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use pm2_telegram::bot::{Keyboard, SendError, Transport};
use pm2_telegram::pm2::{Pm2Error, ProcessManager, StartOptions};

// ============================================================================
// Recording transport
// ============================================================================

/// One outbound call captured by [`RecordingTransport`].
#[derive(Debug, Clone, PartialEq)]
pub enum Render {
    Sent {
        chat_id: i64,
        text: String,
        keyboard: Option<Keyboard>,
    },
    Edited {
        chat_id: i64,
        message_id: i32,
        text: String,
        keyboard: Option<Keyboard>,
    },
    Answered {
        callback_id: String,
    },
}

/// Transport that records every outbound call instead of talking to
/// Telegram.
#[derive(Default)]
pub struct RecordingTransport {
    renders: Mutex<Vec<Render>>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn renders(&self) -> Vec<Render> {
        self.renders.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: Option<Keyboard>,
    ) -> Result<(), SendError> {
        self.renders.lock().unwrap().push(Render::Sent {
            chat_id,
            text: text.to_string(),
            keyboard,
        });
        Ok(())
    }

    async fn edit_message(
        &self,
        chat_id: i64,
        message_id: i32,
        text: &str,
        keyboard: Option<Keyboard>,
    ) -> Result<(), SendError> {
        self.renders.lock().unwrap().push(Render::Edited {
            chat_id,
            message_id,
            text: text.to_string(),
            keyboard,
        });
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<(), SendError> {
        self.renders.lock().unwrap().push(Render::Answered {
            callback_id: callback_id.to_string(),
        });
        Ok(())
    }
}

// ============================================================================
// Scripted process manager
// ============================================================================

/// Scripted [`ProcessManager`] that records every invocation.
///
/// `list_json` answers with `jlist`; every other operation answers with
/// `control`. Errors are scripted as the detail string of a failed
/// invocation.
pub struct FakePm2 {
    jlist: Result<String, String>,
    control: Result<String, String>,
    calls: Mutex<Vec<String>>,
    last_start: Mutex<Option<StartOptions>>,
}

impl FakePm2 {
    pub fn new(jlist: Result<&str, &str>, control: Result<&str, &str>) -> Arc<Self> {
        Arc::new(Self {
            jlist: jlist.map(str::to_string).map_err(str::to_string),
            control: control.map(str::to_string).map_err(str::to_string),
            calls: Mutex::new(Vec::new()),
            last_start: Mutex::new(None),
        })
    }

    /// Fake with a fixed status dump and succeeding control operations.
    pub fn with_jlist(json: &str) -> Arc<Self> {
        Self::new(Ok(json), Ok(""))
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_start(&self) -> Option<StartOptions> {
        self.last_start.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn scripted(result: &Result<String, String>) -> Result<String, Pm2Error> {
        match result {
            Ok(output) => Ok(output.clone()),
            Err(detail) => Err(Pm2Error::Command(detail.clone())),
        }
    }
}

#[async_trait]
impl ProcessManager for FakePm2 {
    async fn list_json(&self) -> Result<String, Pm2Error> {
        self.record("jlist");
        Self::scripted(&self.jlist)
    }

    async fn list_text(&self) -> Result<String, Pm2Error> {
        self.record("list");
        Self::scripted(&self.control)
    }

    async fn describe(&self, name: &str) -> Result<String, Pm2Error> {
        self.record(format!("describe {name}"));
        Self::scripted(&self.control)
    }

    async fn start(&self, options: &StartOptions) -> Result<String, Pm2Error> {
        self.record(format!("start {}", options.script));
        *self.last_start.lock().unwrap() = Some(options.clone());
        Self::scripted(&self.control)
    }

    async fn restart(&self, name: &str) -> Result<String, Pm2Error> {
        self.record(format!("restart {name}"));
        Self::scripted(&self.control)
    }

    async fn stop(&self, name: &str) -> Result<String, Pm2Error> {
        self.record(format!("stop {name}"));
        Self::scripted(&self.control)
    }

    async fn delete(&self, name: &str) -> Result<String, Pm2Error> {
        self.record(format!("delete {name}"));
        Self::scripted(&self.control)
    }

    async fn save(&self) -> Result<String, Pm2Error> {
        self.record("save");
        Self::scripted(&self.control)
    }
}
