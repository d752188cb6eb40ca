//! pm2 process-manager integration.
//!
//! [`Pm2Client`] shells out to the pm2 binary with a bounded timeout;
//! [`model`] parses the JSON status dump (`pm2 jlist`) into typed records
//! and renders them for display. The [`ProcessManager`] trait is the seam
//! consumers depend on, so tests can substitute a scripted fake for the
//! real binary.

pub mod client;
pub mod model;

use async_trait::async_trait;
use thiserror::Error;

pub use client::Pm2Client;
pub use model::{ProcessRecord, ProcessStatus};

// ============================================================================
// Pm2Error
// ============================================================================

/// Failure of a single pm2 invocation.
#[derive(Debug, Error)]
pub enum Pm2Error {
    /// pm2 exited non-zero. Carries trimmed stderr when present, otherwise
    /// the exit status.
    #[error("{0}")]
    Command(String),

    #[error("pm2 did not finish within {0} seconds")]
    Timeout(u64),

    #[error("failed to invoke pm2: {0}")]
    Io(#[from] std::io::Error),
}

// ============================================================================
// StartOptions
// ============================================================================

/// Arguments for `pm2 start`.
///
/// `name` and `interpreter` are omitted from the invocation when unset or
/// blank; `extra_args` are forwarded to the started script after a `--`
/// terminator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartOptions {
    pub script: String,
    pub name: Option<String>,
    pub interpreter: Option<String>,
    pub extra_args: Vec<String>,
}

// ============================================================================
// ProcessManager
// ============================================================================

/// Fixed capability set of the external process manager.
///
/// Every operation maps to one invocation; calls are stateless and
/// independent, and nothing retries.
#[async_trait]
pub trait ProcessManager: Send + Sync {
    /// Full status dump as a JSON array (`pm2 jlist`).
    async fn list_json(&self) -> Result<String, Pm2Error>;

    /// Human-readable status table (`pm2 list`).
    async fn list_text(&self) -> Result<String, Pm2Error>;

    async fn describe(&self, name: &str) -> Result<String, Pm2Error>;

    async fn start(&self, options: &StartOptions) -> Result<String, Pm2Error>;

    async fn restart(&self, name: &str) -> Result<String, Pm2Error>;

    async fn stop(&self, name: &str) -> Result<String, Pm2Error>;

    async fn delete(&self, name: &str) -> Result<String, Pm2Error>;

    /// Persist the current process list (`pm2 save`).
    async fn save(&self) -> Result<String, Pm2Error>;
}
