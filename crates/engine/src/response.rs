//! Response validator — checks the shape of the homework API payload.

use serde_json::Value;

use homework_common::error::CycleError;

use crate::json_type;

/// Validate the response body and return its `homeworks` list.
///
/// The list may be empty; deciding what an empty list means is left to the
/// caller.
pub fn check_response(response: &Value) -> Result<&[Value], CycleError> {
    let Some(body) = response.as_object() else {
        return Err(CycleError::MalformedResponse(format!(
            "expected an object, got {}",
            json_type(response)
        )));
    };

    let homeworks = body
        .get("homeworks")
        .ok_or(CycleError::MissingField("homeworks"))?;

    match homeworks {
        Value::Array(items) => {
            tracing::debug!(count = items.len(), "Response shape valid");
            Ok(items.as_slice())
        }
        other => Err(CycleError::MalformedResponse(format!(
            "homeworks must be an array, got {}",
            json_type(other)
        ))),
    }
}

/// Server-side timestamp to use as the next `from_date` cursor, if supplied.
pub fn current_date(response: &Value) -> Option<i64> {
    response.get("current_date").and_then(Value::as_i64)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_accepts_homeworks_list() {
        let body = json!({"homeworks": [{"homework_name": "a"}], "current_date": 1});
        assert_eq!(check_response(&body).unwrap().len(), 1);
    }

    #[test]
    fn test_empty_list_is_valid() {
        let body = json!({"homeworks": []});
        assert!(check_response(&body).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_non_object() {
        let err = check_response(&json!([{"homeworks": []}])).unwrap_err();
        assert_eq!(
            err,
            CycleError::MalformedResponse("expected an object, got array".to_string())
        );
    }

    #[test]
    fn test_rejects_missing_homeworks() {
        let err = check_response(&json!({"current_date": 1})).unwrap_err();
        assert_eq!(err, CycleError::MissingField("homeworks"));
    }

    #[test]
    fn test_rejects_homeworks_not_list() {
        let err = check_response(&json!({"homeworks": {"homework_name": "a"}})).unwrap_err();
        assert!(matches!(err, CycleError::MalformedResponse(msg) if msg.contains("object")));
    }

    #[test]
    fn test_current_date() {
        assert_eq!(current_date(&json!({"current_date": 1700000000})), Some(1700000000));
        assert_eq!(current_date(&json!({"current_date": "soon"})), None);
        assert_eq!(current_date(&json!({})), None);
    }
}
