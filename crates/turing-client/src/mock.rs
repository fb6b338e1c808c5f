//! Mock grading service for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use turing_core::error::ClientError;
use turing_core::question::QuestionPayload;
use turing_core::traits::{Grade, GradingService};

/// A grading service that never touches the network.
///
/// Returns configurable grades based on answer content matching.
pub struct MockGradingService {
    /// Map of answer substring → grade.
    responses: HashMap<String, Grade>,
    /// Grade returned if no answer matches.
    default_grade: Grade,
    call_count: AtomicU32,
    last_request: Mutex<Option<(QuestionPayload, String)>>,
}

impl MockGradingService {
    /// Create a mock with the given answer→grade mappings.
    pub fn new(responses: HashMap<String, Grade>) -> Self {
        Self {
            responses,
            default_grade: Grade {
                feedback: String::new(),
                score: 0.0,
            },
            call_count: AtomicU32::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Create a mock that always returns the same grade.
    pub fn with_fixed_grade(feedback: &str, score: f64) -> Self {
        let mut mock = Self::new(HashMap::new());
        mock.default_grade = Grade {
            feedback: feedback.to_string(),
            score,
        };
        mock
    }

    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// The question and answer from the most recent call.
    pub fn last_request(&self) -> Option<(QuestionPayload, String)> {
        self.last_request
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl GradingService for MockGradingService {
    async fn short_answer(
        &self,
        question: &QuestionPayload,
        answer: &str,
    ) -> Result<Grade, ClientError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self
            .last_request
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) =
            Some((question.clone(), answer.to_string()));

        let grade = self
            .responses
            .iter()
            .find(|(key, _)| answer.contains(key.as_str()))
            .map(|(_, grade)| grade.clone())
            .unwrap_or_else(|| self.default_grade.clone());
        Ok(grade)
    }
}
