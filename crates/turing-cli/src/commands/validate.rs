//! The `turing validate` command.

use std::path::PathBuf;

use anyhow::Result;

use turing_core::parser::parse_question_file;

pub fn execute(question_path: PathBuf) -> Result<()> {
    let question = parse_question_file(&question_path)?;
    let rubric = question.rubric();

    println!(
        "Question: {} ({} criteria, {})",
        question_path.display(),
        rubric.size(),
        rubric.rubric_type()
    );
    for criteria in rubric.criteria() {
        println!("  {} = {}", criteria.objective(), criteria.weight());
    }

    question.validate()?;
    println!("Question is valid.");

    Ok(())
}
