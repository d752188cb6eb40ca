//! Environment-sourced process configuration.

use thiserror::Error;

/// Environment variable holding the Telegram bot token.
pub const ENV_BOT_TOKEN: &str = "BOT_TOKEN";
/// Environment variable holding the authorized operator chat id.
pub const ENV_ADMIN_ID: &str = "ADMIN_ID";
/// Environment variable enabling debug logging (`"true"` to enable).
pub const ENV_DEBUG: &str = "DEBUG";

/// Process-wide configuration, read once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot token from BotFather.
    pub bot_token: String,
    /// Chat id of the single operator allowed to issue commands.
    pub admin_chat_id: i64,
    /// Verbose logging toggle.
    pub debug: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable '{0}' is not set")]
    MissingEnvVar(String),

    #[error("environment variable '{0}' must be a valid integer")]
    InvalidChatId(String),
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bot_token = get(ENV_BOT_TOKEN)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(ENV_BOT_TOKEN.to_string()))?;

        let admin_raw = get(ENV_ADMIN_ID)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(ENV_ADMIN_ID.to_string()))?;
        let admin_chat_id = admin_raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidChatId(ENV_ADMIN_ID.to_string()))?;

        let debug = get(ENV_DEBUG).as_deref() == Some("true");

        Ok(Self {
            bot_token,
            admin_chat_id,
            debug,
        })
    }
}
