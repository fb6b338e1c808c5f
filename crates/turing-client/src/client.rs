//! JSON-RPC client for the grading service.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::{debug, instrument, warn};

use turing_core::error::{ClientError, ValidationError};
use turing_core::question::QuestionPayload;
use turing_core::traits::{Grade, GradingService};

use crate::config::ClientConfig;
use crate::rpc::{unwrap_response, RpcRequest};

/// Method name the grading service exposes for short-answer questions.
pub const SHORT_ANSWER_METHOD: &str = "short_answer";

/// Posts JSON-RPC envelopes to the grading service.
///
/// The endpoint and credential are fixed at construction; each call is one
/// POST with no retries.
pub struct RpcClient {
    endpoint: String,
    api_key: String,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl std::fmt::Debug for RpcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"***")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl RpcClient {
    /// Build a client from `config`. A non-empty `api_key` takes precedence
    /// over the configured one.
    pub fn new(config: &ClientConfig, api_key: Option<&str>) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            endpoint: config.resolved_endpoint(),
            api_key: config.resolved_api_key(api_key),
            timeout_secs: config.timeout_secs,
            client,
        })
    }

    /// Build a client configured from the environment only.
    pub fn from_env(api_key: Option<&str>) -> Result<Self, ClientError> {
        Self::new(&ClientConfig::from_env(), api_key)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn authorization(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Send `method` with `params` and return the `result` of the reply.
    #[instrument(skip(self, params), fields(endpoint = %self.endpoint))]
    pub async fn request(&self, method: &str, params: Value) -> Result<Value, ClientError> {
        let envelope = RpcRequest::new(method, params);
        debug!("sending RPC request");

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", self.authorization())
            .json(&envelope)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        // The status code is not interpreted; error envelopes may come with any status.
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        let decoded: Map<String, Value> =
            serde_json::from_str(&body).map_err(|e| ClientError::InvalidResponse {
                status,
                message: format!("failed to parse response: {e}"),
            })?;

        unwrap_response(decoded).inspect_err(|e| {
            if let ClientError::Rpc(payload) = e {
                warn!(status, error = %payload, "grading service returned an error");
            }
        })
    }

    /// Grade `answer` against a serialized question.
    ///
    /// Sends `[data, answer]` as positional params. A result without a string
    /// `feedback` or a numeric `score` fails with [`ClientError::MissingField`].
    pub async fn short_answer(
        &self,
        data: &QuestionPayload,
        answer: &str,
    ) -> Result<Grade, ClientError> {
        let question = serde_json::to_value(data)
            .map_err(|e| ValidationError::MalformedQuestion(e.to_string()))?;
        let params = Value::Array(vec![question, Value::String(answer.to_string())]);

        let result = self.request(SHORT_ANSWER_METHOD, params).await?;
        parse_grade(&result)
    }

    fn transport_error(&self, e: reqwest::Error) -> ClientError {
        if e.is_timeout() {
            ClientError::Timeout(self.timeout_secs)
        } else {
            ClientError::Network(e.to_string())
        }
    }
}

fn parse_grade(result: &Value) -> Result<Grade, ClientError> {
    let feedback = result
        .get("feedback")
        .and_then(Value::as_str)
        .ok_or(ClientError::MissingField("feedback"))?;
    let score = result
        .get("score")
        .and_then(Value::as_f64)
        .ok_or(ClientError::MissingField("score"))?;

    Ok(Grade {
        feedback: feedback.to_string(),
        score,
    })
}

#[async_trait]
impl GradingService for RpcClient {
    async fn short_answer(
        &self,
        question: &QuestionPayload,
        answer: &str,
    ) -> Result<Grade, ClientError> {
        RpcClient::short_answer(self, question, answer).await
    }
}
