use thiserror::Error;

/// Every failure the bot can hit, from startup to notification delivery.
#[derive(Debug, Error)]
pub enum BotError {
    #[error("Missing required environment variables: {}", .missing.join(", "))]
    ConfigIncomplete { missing: Vec<String> },

    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    #[error("Request to the homework API failed: {0}")]
    RequestFailure(#[source] reqwest::Error),

    #[error("Endpoint {url} is unavailable, API responded with status {status}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("API response is not valid JSON: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("Unexpected response shape: {0}")]
    InvalidShape(String),

    #[error("Missing key in API response: {0}")]
    MissingKey(String),

    #[error("API returned an empty `{0}` list")]
    EmptyResult(String),

    #[error("Unknown homework status: {}", .0.as_deref().unwrap_or("<absent>"))]
    UnknownStatus(Option<String>),

    #[error("Failed to deliver Telegram message: {0}")]
    DeliveryFailure(String),
}

impl BotError {
    /// Delivery failures are logged and swallowed by the poll loop; every
    /// other error takes the critical path.
    pub fn is_delivery_failure(&self) -> bool {
        matches!(self, BotError::DeliveryFailure(_))
    }

    /// Short, stable name of the variant, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            BotError::ConfigIncomplete { .. } => "config_incomplete",
            BotError::InvalidConfig(_) => "invalid_config",
            BotError::RequestFailure(_) => "request_failure",
            BotError::UnexpectedStatus { .. } => "unexpected_status",
            BotError::MalformedResponse(_) => "malformed_response",
            BotError::InvalidShape(_) => "invalid_shape",
            BotError::MissingKey(_) => "missing_key",
            BotError::EmptyResult(_) => "empty_result",
            BotError::UnknownStatus(_) => "unknown_status",
            BotError::DeliveryFailure(_) => "delivery_failure",
        }
    }
}
