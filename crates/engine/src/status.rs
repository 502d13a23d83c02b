//! Status extractor — validates a homework record and builds its verdict.
//!
//! Every defect in the record itself is reported as
//! [`CycleError::MalformedRecord`] naming the offending field or value.

use serde_json::{Map, Value};

use homework_common::error::CycleError;
use homework_common::types::{HomeworkRecord, HomeworkStatus};

use crate::json_type;

/// Validate a single homework record.
pub fn parse_homework(homework: &Value) -> Result<HomeworkRecord, CycleError> {
    let Some(record) = homework.as_object() else {
        return Err(CycleError::MalformedRecord(format!(
            "expected an object, got {}",
            json_type(homework)
        )));
    };

    let status_code = required_str(record, "status")?;
    let homework_name = required_str(record, "homework_name")?;

    let status = HomeworkStatus::from_code(status_code).ok_or_else(|| {
        CycleError::MalformedRecord(format!("unknown status {status_code:?}"))
    })?;

    tracing::debug!(homework = homework_name, %status, "Parsed newest homework");

    Ok(HomeworkRecord {
        homework_name: homework_name.to_string(),
        status,
        reviewer_comment: optional_str(record, "reviewer_comment"),
        date_updated: optional_str(record, "date_updated"),
    })
}

/// Validate a homework record and return the notification text for it.
pub fn parse_status(homework: &Value) -> Result<String, CycleError> {
    parse_homework(homework).map(|record| record.status_message())
}

fn required_str<'a>(record: &'a Map<String, Value>, field: &'static str) -> Result<&'a str, CycleError> {
    match record.get(field) {
        None => Err(CycleError::MalformedRecord(format!("missing field {field}"))),
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(CycleError::MalformedRecord(format!(
            "{field} must be a string, got {}",
            json_type(other)
        ))),
    }
}

fn optional_str(record: &Map<String, Value>, field: &str) -> Option<String> {
    record.get(field).and_then(Value::as_str).map(str::to_string)
}
