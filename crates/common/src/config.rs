use std::path::PathBuf;
use std::time::Duration;

use crate::error::BotError;

/// Default Practicum homework-status endpoint.
pub const DEFAULT_PRACTICUM_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Default Telegram Bot API base URL.
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Default pause between two poll cycles, in seconds.
pub const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;

/// Default log file, truncated on every start.
pub const DEFAULT_LOG_FILE: &str = "main.log";

/// Environment variables that must be present for the bot to start.
pub const REQUIRED_VARS: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

/// The three secrets the bot cannot run without.
///
/// Values are opaque: only presence is checked, never their format.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub practicum_token: Option<String>,
    pub telegram_token: Option<String>,
    pub telegram_chat_id: Option<String>,
}

impl Credentials {
    /// Read credentials through `lookup`. Empty values are treated as absent.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.is_empty());
        Self {
            practicum_token: read("PRACTICUM_TOKEN"),
            telegram_token: read("TELEGRAM_TOKEN"),
            telegram_chat_id: read("TELEGRAM_CHAT_ID"),
        }
    }

    /// Names of the required variables that are missing, in declaration order.
    pub fn missing(&self) -> Vec<&'static str> {
        let values = [
            &self.practicum_token,
            &self.telegram_token,
            &self.telegram_chat_id,
        ];
        REQUIRED_VARS
            .iter()
            .zip(values)
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| *name)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }
}

/// Global application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// OAuth token for the Practicum API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Chat that receives every notification
    pub telegram_chat_id: String,

    /// Homework-status endpoint URL
    pub practicum_endpoint: String,

    /// Telegram Bot API base URL (overridable for testing)
    pub telegram_api_url: String,

    /// Pause between poll cycles
    pub retry_period: Duration,

    /// Log file path
    pub log_file: PathBuf,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// The binary loads `.env` into the environment before calling this.
    pub fn from_env() -> Result<Self, BotError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BotError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credentials = Credentials::from_lookup(&lookup);
        let missing = credentials.missing();
        if !missing.is_empty() {
            return Err(BotError::ConfigIncomplete {
                missing: missing.into_iter().map(String::from).collect(),
            });
        }

        let retry_period_secs = match lookup("RETRY_PERIOD_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|_| {
                BotError::InvalidConfig("RETRY_PERIOD_SECS must be a valid u64".to_string())
            })?,
            None => DEFAULT_RETRY_PERIOD_SECS,
        };

        Ok(Self {
            practicum_token: credentials.practicum_token.unwrap_or_default(),
            telegram_token: credentials.telegram_token.unwrap_or_default(),
            telegram_chat_id: credentials.telegram_chat_id.unwrap_or_default(),
            practicum_endpoint: lookup("PRACTICUM_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_PRACTICUM_ENDPOINT.to_string()),
            telegram_api_url: lookup("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
            retry_period: Duration::from_secs(retry_period_secs),
            log_file: log_file_from(lookup),
        })
    }
}

/// Resolve the log file path from the process environment.
///
/// Logging starts before the rest of the configuration is validated, so this
/// is read on its own.
pub fn log_file_from_env() -> PathBuf {
    log_file_from(|name| std::env::var(name).ok())
}

fn log_file_from<F>(lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    lookup("HOMEWORK_LOG_FILE")
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
}
