//! Error types for the grading client.
//!
//! `ValidationError` covers malformed inputs caught before anything is sent.
//! `ClientError` wraps it together with the failures of a remote grading call,
//! so callers of `grade` can match on a single type.

use thiserror::Error;

/// A question, rubric or criteria failed validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A criteria weight violated one of the weight constraints.
    #[error("invalid weight {weight}: {reason}")]
    InvalidWeight { weight: f64, reason: &'static str },

    /// A label did not name any known objective.
    #[error("unknown objective: {0:?}")]
    UnknownObjective(String),

    /// A name did not match any rubric preset.
    #[error("unknown rubric type: {0:?}")]
    UnknownRubricType(String),

    /// A rubric payload did not have the label -> weight shape.
    #[error("invalid rubric payload: {0}")]
    MalformedRubric(String),

    /// A question payload was missing a field or had the wrong shape.
    #[error("invalid question payload: {0}")]
    MalformedQuestion(String),

    #[error("Rubric must have at least one criteria.")]
    EmptyRubric,

    #[error("Question body and example answer cannot be empty.")]
    IncompleteQuestion,
}

/// Errors that can occur while grading an answer against the remote service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The question was rejected locally before any request was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The service answered with an error envelope. The payload is kept as sent.
    #[error("RPC error: {0}")]
    Rpc(serde_json::Value),

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    Network(String),

    /// A decoded response lacked a field the caller expected.
    #[error("response is missing field `{0}`")]
    MissingField(&'static str),

    /// The response body could not be decoded as a JSON object.
    #[error("invalid response (HTTP {status}): {message}")]
    InvalidResponse { status: u16, message: String },
}

impl ClientError {
    /// Returns the server-supplied error payload, if this is an error envelope.
    pub fn rpc_payload(&self) -> Option<&serde_json::Value> {
        match self {
            ClientError::Rpc(payload) => Some(payload),
            _ => None,
        }
    }

    /// Returns `true` if the failure happened locally, before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_messages_match_wire_wording() {
        assert_eq!(
            ValidationError::EmptyRubric.to_string(),
            "Rubric must have at least one criteria."
        );
        assert_eq!(
            ValidationError::IncompleteQuestion.to_string(),
            "Question body and example answer cannot be empty."
        );
    }

    #[test]
    fn rpc_payload_is_preserved() {
        let err = ClientError::Rpc(serde_json::json!("bad request"));
        assert_eq!(err.rpc_payload(), Some(&serde_json::json!("bad request")));
        assert!(err.to_string().contains("bad request"));
        assert!(!err.is_validation());
    }

    #[test]
    fn validation_converts_into_client_error() {
        let err: ClientError = ValidationError::EmptyRubric.into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Rubric must have at least one criteria.");
    }
}
