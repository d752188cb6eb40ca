//! Typed view of the pm2 JSON status dump.
//!
//! Records are parsed fresh from `pm2 jlist` on every listing request and
//! discarded after the render that consumes them; nothing is cached.

use serde::Deserialize;

// ============================================================================
// ProcessRecord
// ============================================================================

/// One managed process, as reported by `pm2 jlist`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessRecord {
    pub name: String,
    /// Manager-assigned numeric id.
    pub pm_id: i64,
    pub monit: Monit,
    pub pm2_env: Pm2Env,
}

/// Instantaneous resource sample.
#[derive(Debug, Clone, Deserialize)]
pub struct Monit {
    /// Resident memory in bytes.
    pub memory: u64,
    /// CPU percentage.
    pub cpu: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Pm2Env {
    #[serde(default)]
    pub status: ProcessStatus,
    #[serde(default)]
    pub restart_time: u64,
    #[serde(default)]
    pub unstable_restarts: u64,
}

// ============================================================================
// ProcessStatus
// ============================================================================

/// pm2 process state. Anything unrecognized maps to `Unknown`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessStatus {
    Online,
    Stopped,
    Errored,
    #[default]
    #[serde(other)]
    Unknown,
}

impl ProcessStatus {
    /// Status icon shown in listings.
    pub fn icon(&self) -> &'static str {
        match self {
            ProcessStatus::Online => "🟢",
            ProcessStatus::Errored => "🔴",
            _ => "⚪",
        }
    }
}

impl std::fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ProcessStatus::Online => "online",
            ProcessStatus::Stopped => "stopped",
            ProcessStatus::Errored => "errored",
            ProcessStatus::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Parsing & rendering
// ============================================================================

/// Parse `pm2 jlist` output.
///
/// Malformed JSON fails as a whole; there are no partial results.
pub fn parse_list(json: &str) -> Result<Vec<ProcessRecord>, serde_json::Error> {
    serde_json::from_str(json)
}

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Render the process listing for display.
pub fn format_list(records: &[ProcessRecord]) -> String {
    if records.is_empty() {
        return "⚠️ No processes running.".to_string();
    }

    let mut out = String::from("📊 **Process Status:**\n\n");
    for record in records {
        // Integer division: 5_242_880 bytes renders as 5MB, truncated.
        let mem_mb = record.monit.memory / BYTES_PER_MB;
        out.push_str(&format!(
            "{} **{}** (ID: {})\n",
            record.pm2_env.status.icon(),
            record.name,
            record.pm_id
        ));
        out.push_str(&format!(
            "└ `{}` | 💾 {}MB | 💻 {:.1}%\n\n",
            record.pm2_env.status, mem_mb, record.monit.cpu
        ));
    }
    out
}
