//! The `turing grade` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use turing_client::{load_config_from, RpcClient};
use turing_core::parser::parse_question_file;

pub async fn execute(
    question_path: PathBuf,
    answer: String,
    api_key: Option<String>,
    config_path: Option<PathBuf>,
    format: String,
) -> Result<()> {
    let question = parse_question_file(&question_path)?;
    let config = load_config_from(config_path.as_deref())?;
    let client = RpcClient::new(&config, api_key.as_deref())?;

    tracing::info!(endpoint = client.endpoint(), "grading answer");

    let grade = question
        .grade(&client, &answer)
        .await
        .with_context(|| format!("failed to grade answer for {}", question_path.display()))?;

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&grade)?),
        "text" => {
            println!("Score: {}", grade.score);
            println!("Feedback: {}", grade.feedback);
        }
        other => anyhow::bail!("unknown format: {other} (expected text or json)"),
    }

    Ok(())
}
