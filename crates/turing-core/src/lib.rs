//! turing-core — rubric model and short-answer questions.
//!
//! This crate defines the grading vocabulary, the rubric and criteria rules,
//! the wire payload for questions, and the [`traits::GradingService`] seam
//! that a transport implements to grade answers remotely.

pub mod criteria;
pub mod error;
pub mod objective;
pub mod parser;
pub mod question;
pub mod rubric;
pub mod traits;

pub use criteria::GradingCriteria;
pub use error::{ClientError, ValidationError};
pub use objective::Objective;
pub use question::{QuestionPayload, ShortAnswerQuestion};
pub use rubric::{Rubric, RubricType};
pub use traits::{Grade, GradingService};
