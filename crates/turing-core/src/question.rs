//! Short-answer questions.
//!
//! A question can be built in an incomplete state and filled in later; it is
//! only checked by [`ShortAnswerQuestion::validate`], which `grade` runs
//! before anything is sent.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{ClientError, ValidationError};
use crate::objective::Objective;
use crate::rubric::{Rubric, RubricType};
use crate::traits::{Grade, GradingService};

/// A question with an example answer and the rubric used to grade responses.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortAnswerQuestion {
    pub body: String,
    pub example_answer: String,
    rubric: Rubric,
}

/// The wire representation of a question, as sent to the grading service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionPayload {
    pub body: String,
    pub example_answer: String,
    /// Objective label -> weight.
    pub rubric: BTreeMap<String, f64>,
}

impl ShortAnswerQuestion {
    /// A question with an empty rubric. Nothing is validated here.
    pub fn new(body: impl Into<String>, example_answer: impl Into<String>) -> Self {
        Self::with_rubric(body, example_answer, Rubric::empty())
    }

    pub fn with_rubric(
        body: impl Into<String>,
        example_answer: impl Into<String>,
        rubric: Rubric,
    ) -> Self {
        Self {
            body: body.into(),
            example_answer: example_answer.into(),
            rubric,
        }
    }

    /// A question whose rubric starts from the defaults of `rubric_type`.
    pub fn from_rubric_type(
        body: impl Into<String>,
        example_answer: impl Into<String>,
        rubric_type: RubricType,
    ) -> Self {
        Self::with_rubric(body, example_answer, Rubric::from_rubric_type(rubric_type))
    }

    pub fn rubric(&self) -> &Rubric {
        &self.rubric
    }

    /// Set the criteria for `objective` on this question's rubric.
    pub fn add_criteria(
        &mut self,
        objective: Objective,
        weight: f64,
    ) -> Result<(), ValidationError> {
        self.rubric.add_criteria(objective, weight)
    }

    /// Replace the rubric wholesale.
    pub fn set_rubric(&mut self, rubric: Rubric) {
        self.rubric = rubric;
    }

    /// Check that the question can be sent for grading.
    ///
    /// The rubric is checked first, then the body and example answer.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.rubric.is_empty() {
            return Err(ValidationError::EmptyRubric);
        }
        if self.body.is_empty() || self.example_answer.is_empty() {
            return Err(ValidationError::IncompleteQuestion);
        }
        Ok(())
    }

    /// Flatten into the wire payload. Does not validate.
    pub fn to_wire_payload(&self) -> QuestionPayload {
        QuestionPayload {
            body: self.body.clone(),
            example_answer: self.example_answer.clone(),
            rubric: self.rubric.serialize(),
        }
    }

    /// Rebuild a question from a decoded wire payload.
    pub fn from_wire_payload(payload: &serde_json::Value) -> Result<Self, ValidationError> {
        let body = string_field(payload, "body")?;
        let example_answer = string_field(payload, "example_answer")?;
        let rubric = payload.get("rubric").ok_or_else(|| {
            ValidationError::MalformedQuestion("missing field `rubric`".to_string())
        })?;

        Ok(Self::with_rubric(
            body,
            example_answer,
            Rubric::from_payload(rubric)?,
        ))
    }

    /// Grade `answer` with `service`.
    ///
    /// The question is validated first; an invalid question fails with
    /// [`ClientError::Validation`] and no request is made.
    #[instrument(skip_all, fields(criteria = self.rubric.size()))]
    pub async fn grade(
        &self,
        service: &dyn GradingService,
        answer: &str,
    ) -> Result<Grade, ClientError> {
        self.validate()?;
        let payload = self.to_wire_payload();
        let grade = service.short_answer(&payload, answer).await?;
        debug!(score = grade.score, "answer graded");
        Ok(grade)
    }
}

impl TryFrom<QuestionPayload> for ShortAnswerQuestion {
    type Error = ValidationError;

    fn try_from(payload: QuestionPayload) -> Result<Self, Self::Error> {
        let rubric = Rubric::from_weights(payload.rubric)?;
        Ok(Self::with_rubric(payload.body, payload.example_answer, rubric))
    }
}

fn string_field(payload: &serde_json::Value, name: &str) -> Result<String, ValidationError> {
    match payload.get(name) {
        Some(serde_json::Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(ValidationError::MalformedQuestion(format!(
            "field `{name}` must be a string, got {other}"
        ))),
        None => Err(ValidationError::MalformedQuestion(format!(
            "missing field `{name}`"
        ))),
    }
}
