//! pm2 invocation via subprocess.
//!
//! All operations shell out through `tokio::process::Command` with a fixed
//! wall-clock timeout. Output is buffered in full: stdout is the success
//! payload, stderr the error detail.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use super::{Pm2Error, ProcessManager, StartOptions};

/// Wall-clock bound for a single pm2 invocation, in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Shells out to the pm2 binary.
#[derive(Debug, Clone)]
pub struct Pm2Client {
    binary: String,
    timeout_secs: u64,
}

impl Default for Pm2Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Pm2Client {
    pub fn new() -> Self {
        Self {
            binary: "pm2".to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    #[cfg(test)]
    fn with_binary(binary: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            binary: binary.into(),
            timeout_secs,
        }
    }

    /// Run pm2 with the given arguments and classify the outcome.
    ///
    /// Zero exit returns the trimmed stdout (empty output is a valid
    /// success). Non-zero exit surfaces the trimmed stderr as the error
    /// detail, falling back to the exit status when pm2 printed nothing.
    /// A run that outlives the timeout is killed and reported as such.
    async fn run<I, S>(&self, args: I) -> Result<String, Pm2Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        let output = Command::new(&self.binary)
            .args(args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output();

        let output = tokio::time::timeout(Duration::from_secs(self.timeout_secs), output)
            .await
            .map_err(|_| Pm2Error::Timeout(self.timeout_secs))??;

        if output.status.success() {
            return Ok(String::from_utf8_lossy(&output.stdout).trim().to_string());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        if stderr.is_empty() {
            Err(Pm2Error::Command(format!(
                "pm2 exited with {}",
                output.status
            )))
        } else {
            Err(Pm2Error::Command(stderr.to_string()))
        }
    }
}

#[async_trait]
impl ProcessManager for Pm2Client {
    async fn list_json(&self) -> Result<String, Pm2Error> {
        self.run(["jlist"]).await
    }

    async fn list_text(&self) -> Result<String, Pm2Error> {
        self.run(["list"]).await
    }

    async fn describe(&self, name: &str) -> Result<String, Pm2Error> {
        self.run(["describe", name]).await
    }

    async fn start(&self, options: &StartOptions) -> Result<String, Pm2Error> {
        let mut args = vec!["start".to_string(), options.script.clone()];

        if let Some(name) = options.name.as_deref().filter(|n| !n.is_empty()) {
            args.push("--name".to_string());
            args.push(name.to_string());
        }
        if let Some(interpreter) = options.interpreter.as_deref().filter(|i| !i.is_empty()) {
            args.push("--interpreter".to_string());
            args.push(interpreter.to_string());
        }
        if !options.extra_args.is_empty() {
            args.push("--".to_string());
            args.extend(options.extra_args.iter().cloned());
        }

        debug!(script = %options.script, "starting process");
        self.run(args).await
    }

    async fn restart(&self, name: &str) -> Result<String, Pm2Error> {
        self.run(["restart", name]).await
    }

    async fn stop(&self, name: &str) -> Result<String, Pm2Error> {
        self.run(["stop", name]).await
    }

    async fn delete(&self, name: &str) -> Result<String, Pm2Error> {
        self.run(["delete", name]).await
    }

    async fn save(&self) -> Result<String, Pm2Error> {
        self.run(["save"]).await
    }
}
