//! Rendering of the chat notification for a submission.

use serde_json::Value;

use homework_common::error::BotError;
use homework_common::types::{HOMEWORK_NAME_KEY, ReviewStatus, STATUS_KEY};

/// Render the status-change notification for one submission record.
///
/// Output has the exact shape
/// `Изменился статус проверки работы "<name>". <verdict>`.
pub fn format_notification(submission: &Value) -> Result<String, BotError> {
    tracing::debug!("Extracting review status from submission");

    let name = match submission.get(HOMEWORK_NAME_KEY) {
        Some(Value::String(name)) => name,
        Some(other) => {
            return Err(BotError::InvalidShape(format!(
                "`{HOMEWORK_NAME_KEY}` must be a string, got {other}"
            )));
        }
        None => return Err(BotError::MissingKey(HOMEWORK_NAME_KEY.to_string())),
    };

    let status = match submission.get(STATUS_KEY) {
        Some(Value::String(code)) => code.parse::<ReviewStatus>()?,
        Some(other) => return Err(BotError::UnknownStatus(Some(other.to_string()))),
        None => return Err(BotError::UnknownStatus(None)),
    };

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        name,
        status.verdict()
    ))
}
