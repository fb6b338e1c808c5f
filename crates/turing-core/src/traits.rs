//! The seam between the question model and the remote grading service.
//!
//! `turing-client` implements [`GradingService`] over JSON-RPC; tests can
//! plug in their own implementation without any network.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ClientError;
use crate::question::QuestionPayload;

/// A backend that grades an answer to a serialized short-answer question.
#[async_trait]
pub trait GradingService: Send + Sync {
    /// Grade `answer` against `question`, returning feedback and a score.
    async fn short_answer(
        &self,
        question: &QuestionPayload,
        answer: &str,
    ) -> Result<Grade, ClientError>;
}

/// The result of grading one answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    /// Free-text feedback from the grader.
    pub feedback: String,
    pub score: f64,
}
