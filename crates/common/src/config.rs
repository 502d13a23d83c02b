use std::fmt;
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_PRACTICUM_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Variables the bot cannot run without, in the order they are reported.
pub const REQUIRED_VARS: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

/// Application configuration, built once at startup and passed by reference.
#[derive(Clone)]
pub struct AppConfig {
    /// OAuth token for the homework API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Chat that receives status notifications
    pub telegram_chat_id: String,

    /// Homework statuses endpoint
    pub practicum_endpoint: String,

    /// Telegram Bot API base URL (overridable for tests and proxies)
    pub telegram_api_url: String,

    /// Pause between polling cycles
    pub retry_period: Duration,

    /// Timeout applied to every outbound HTTP request
    pub http_timeout: Duration,
}

impl AppConfig {
    /// Load configuration from environment variables (and `.env`, if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary name → value lookup.
    ///
    /// Empty values count as missing. Every missing required variable is
    /// reported at once.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let mut missing = Vec::new();
        let [practicum_token, telegram_token, telegram_chat_id] = REQUIRED_VARS.map(|name| {
            let value = get(name);
            if value.is_none() {
                missing.push(name);
            }
            value
        });

        let (Some(practicum_token), Some(telegram_token), Some(telegram_chat_id)) =
            (practicum_token, telegram_token, telegram_chat_id)
        else {
            tracing::error!(
                missing = %missing.join(", "),
                "Required environment variables are missing, bot stopped"
            );
            return Err(ConfigError::MissingConfig(missing));
        };

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            practicum_endpoint: get("PRACTICUM_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_PRACTICUM_ENDPOINT.to_string()),
            telegram_api_url: get("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
            retry_period: Duration::from_secs(parse_secs(
                "RETRY_PERIOD_SECS",
                get("RETRY_PERIOD_SECS"),
                DEFAULT_RETRY_PERIOD_SECS,
            )?),
            http_timeout: Duration::from_secs(parse_secs(
                "HTTP_TIMEOUT_SECS",
                get("HTTP_TIMEOUT_SECS"),
                DEFAULT_HTTP_TIMEOUT_SECS,
            )?),
        })
    }
}

fn parse_secs(name: &'static str, raw: Option<String>, default: u64) -> Result<u64, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            reason: format!("{value:?} is not a whole number of seconds"),
        }),
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("practicum_endpoint", &self.practicum_endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("retry_period", &self.retry_period)
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}
