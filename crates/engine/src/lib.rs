//! Pure validation stages of the polling pipeline.
//!
//! The bot fetches a raw JSON body each cycle; these modules turn it into a
//! validated [`HomeworkRecord`](homework_common::types::HomeworkRecord) or a
//! typed [`CycleError`](homework_common::error::CycleError) describing exactly
//! what was wrong with it.

pub mod response;
pub mod status;

use serde_json::Value;

/// Name of a JSON value's type, used in diagnostics.
pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
