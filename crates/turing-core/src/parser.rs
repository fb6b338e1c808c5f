//! Question file parser.
//!
//! Loads a short-answer question from a TOML or JSON file. The rubric starts
//! from an optional preset and is then adjusted by a `label -> weight` table.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::question::ShortAnswerQuestion;
use crate::rubric::{Rubric, RubricType};

/// Intermediate structure shared by the TOML and JSON file formats.
#[derive(Debug, Deserialize)]
struct QuestionFile {
    body: String,
    example_answer: String,
    #[serde(default)]
    rubric_type: Option<String>,
    #[serde(default)]
    rubric: Option<serde_json::Value>,
}

/// Parse a question file, choosing the format from the file extension.
///
/// `.json` files are read as JSON; anything else is read as TOML.
pub fn parse_question_file(path: &Path) -> Result<ShortAnswerQuestion> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question file: {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let question = if is_json {
        parse_question_json(&content)
    } else {
        parse_question_toml(&content)
    };
    question.with_context(|| format!("failed to parse question file: {}", path.display()))
}

/// Parse a question from a TOML string.
pub fn parse_question_toml(content: &str) -> Result<ShortAnswerQuestion> {
    let file: QuestionFile = toml::from_str(content).context("invalid TOML")?;
    build_question(file)
}

/// Parse a question from a JSON string.
pub fn parse_question_json(content: &str) -> Result<ShortAnswerQuestion> {
    let file: QuestionFile = serde_json::from_str(content).context("invalid JSON")?;
    build_question(file)
}

fn build_question(file: QuestionFile) -> Result<ShortAnswerQuestion> {
    let rubric_type = match &file.rubric_type {
        Some(name) => name.parse::<RubricType>()?,
        None => RubricType::Custom,
    };

    let mut rubric = Rubric::from_rubric_type(rubric_type);
    if let Some(overrides) = &file.rubric {
        // Overrides go through the wire-payload path so they get the same checks.
        let overrides = Rubric::from_payload(overrides).context("invalid [rubric] table")?;
        for criteria in overrides.criteria() {
            rubric.add_criteria(criteria.objective(), criteria.weight())?;
        }
    }

    Ok(ShortAnswerQuestion::with_rubric(
        file.body,
        file.example_answer,
        rubric,
    ))
}
