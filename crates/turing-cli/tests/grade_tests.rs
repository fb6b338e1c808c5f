//! End-to-end `turing grade` tests against a mock grading service.
//!
//! The mock server runs on the tokio runtime while the CLI binary is driven
//! synchronously through assert_cmd, so these tests use the multi-thread flavor.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_partial_json, header, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn turing() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("turing").unwrap();
    cmd.env_remove("TURING_API_KEY").env_remove("RUST_LOG");
    cmd
}

fn factual_question(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("question.toml");
    std::fs::write(
        &path,
        r#"
body = "What is the capital of Australia?"
example_answer = "Canberra"
rubric_type = "factual"
"#,
    )
    .unwrap();
    path
}

#[tokio::test(flavor = "multi_thread")]
async fn grade_prints_feedback_and_score() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let question = factual_question(&dir);

    Mock::given(method("POST"))
        .and(header("Authorization", "Bearer env-key"))
        .and(body_partial_json(json!({"jsonrpc": "2.0", "method": "short_answer"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": {"feedback": "good job", "score": 0.9}
        })))
        .expect(1)
        .mount(&server)
        .await;

    turing()
        .current_dir(dir.path())
        .env("OVERRIDDEN_ENDPOINT", server.uri())
        .env("TURING_API_KEY", "env-key")
        .arg("grade")
        .arg("--question")
        .arg(&question)
        .arg("--answer")
        .arg("Canberra")
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 0.9"))
        .stdout(predicate::str::contains("Feedback: good job"));
}

#[tokio::test(flavor = "multi_thread")]
async fn explicit_api_key_overrides_env() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let question = factual_question(&dir);

    Mock::given(method("POST"))
        .and(header("Authorization", "Bearer flag-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": {"feedback": "ok", "score": 1.0}
        })))
        .expect(1)
        .mount(&server)
        .await;

    turing()
        .current_dir(dir.path())
        .env("OVERRIDDEN_ENDPOINT", server.uri())
        .env("TURING_API_KEY", "env-key")
        .arg("grade")
        .arg("--question")
        .arg(&question)
        .arg("--answer")
        .arg("Canberra")
        .arg("--api-key")
        .arg("flag-key")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"score\": 1.0"));
}

#[tokio::test(flavor = "multi_thread")]
async fn grade_surfaces_server_error() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let question = factual_question(&dir);

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "bad request"})))
        .mount(&server)
        .await;

    turing()
        .current_dir(dir.path())
        .env("OVERRIDDEN_ENDPOINT", server.uri())
        .arg("grade")
        .arg("--question")
        .arg(&question)
        .arg("--answer")
        .arg("Sydney")
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad request"));
}

#[tokio::test(flavor = "multi_thread")]
async fn config_file_sets_endpoint() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let question = factual_question(&dir);

    let config = dir.path().join("custom.toml");
    std::fs::write(
        &config,
        format!("endpoint = \"{}\"\napi_key = \"file-key\"\n", server.uri()),
    )
    .unwrap();

    Mock::given(method("POST"))
        .and(header("Authorization", "Bearer file-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": {"feedback": "from config", "score": 0.5}
        })))
        .expect(1)
        .mount(&server)
        .await;

    turing()
        .current_dir(dir.path())
        .env_remove("OVERRIDDEN_ENDPOINT")
        .arg("grade")
        .arg("--question")
        .arg(&question)
        .arg("--answer")
        .arg("Canberra")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("from config"));
}
