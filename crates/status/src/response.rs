//! Shape checks over the decoded homework-status payload.

use serde_json::Value;

use homework_common::error::BotError;
use homework_common::types::{CURRENT_DATE_KEY, HOMEWORKS_KEY};

/// Return the most recent submission from a decoded API body.
///
/// The API lists submissions newest first, so this is the first element of
/// the `homeworks` array. The record itself is returned untouched; its fields
/// are checked when the notification is rendered.
pub fn extract_latest_submission(body: &Value) -> Result<&Value, BotError> {
    let object = body.as_object().ok_or_else(|| {
        tracing::error!("API response is not a JSON object");
        BotError::InvalidShape(format!("expected a JSON object, got {}", type_name(body)))
    })?;

    let homeworks = object.get(HOMEWORKS_KEY).ok_or_else(|| {
        tracing::error!(key = HOMEWORKS_KEY, "API response has no submissions key");
        BotError::MissingKey(HOMEWORKS_KEY.to_string())
    })?;

    let list = homeworks.as_array().ok_or_else(|| {
        tracing::error!(key = HOMEWORKS_KEY, "Submissions value is not a list");
        BotError::InvalidShape(format!(
            "`{}` must be a list, got {}",
            HOMEWORKS_KEY,
            type_name(homeworks)
        ))
    })?;

    list.first().ok_or_else(|| {
        tracing::debug!("Submission list is empty");
        BotError::EmptyResult(HOMEWORKS_KEY.to_string())
    })
}

/// Server-reported time of the response, used as the next poll cursor.
///
/// `None` when `current_date` is absent or not an integer.
pub fn server_time(body: &Value) -> Option<i64> {
    body.get(CURRENT_DATE_KEY).and_then(Value::as_i64)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
