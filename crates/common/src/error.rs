use thiserror::Error;

/// Fatal configuration errors. The bot must not start when one of these occurs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingConfig(Vec<&'static str>),

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Errors that abort a single polling cycle. The loop logs them and carries on.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CycleError {
    #[error("API call failed: {0}")]
    ApiCall(String),

    #[error("Unexpected response status: {0}")]
    UnexpectedStatus(u16),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// A required key is absent from the response envelope.
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// The newest homework record is unusable: not an object, a required
    /// field is absent or mistyped, or the status is unrecognized.
    #[error("Malformed record: {0}")]
    MalformedRecord(String),
}

impl CycleError {
    /// Short machine-friendly label used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            CycleError::ApiCall(_) => "api_call",
            CycleError::UnexpectedStatus(_) => "unexpected_status",
            CycleError::MalformedResponse(_) => "malformed_response",
            CycleError::MissingField(_) => "missing_field",
            CycleError::MalformedRecord(_) => "malformed_record",
        }
    }
}

/// Delivery failures reported by a notifier.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Notification request failed: {0}")]
    Transport(String),

    #[error("Refusing to send an empty notification")]
    EmptyMessage,

    #[error("Notification rejected with status {status}: {description}")]
    Rejected { status: u16, description: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_error_clone_keeps_kind() {
        let err = CycleError::MalformedRecord("missing field status".to_string());
        let copy = err.clone();
        assert_eq!(copy, err);
        assert_eq!(copy.kind(), "malformed_record");
        assert_eq!(copy.to_string(), "Malformed record: missing field status");
    }

    #[test]
    fn test_envelope_and_record_kinds_differ() {
        assert_eq!(CycleError::MissingField("homeworks").kind(), "missing_field");
        assert_eq!(CycleError::UnexpectedStatus(503).kind(), "unexpected_status");
    }
}
