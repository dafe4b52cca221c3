//! HTTP client for the completion endpoint

use crate::config::CompletionConfig;
use crate::error::{Error, Result};
use crate::quiz::request::{build_prompt, build_request_body, extract_completion};
use crate::quiz::QuizParameters;
use futures_util::future::BoxFuture;
use serde_json::Value;

/// Quiz generation seam used by the page runtime
pub trait QuizGenerator: Send + Sync {
    /// Generate raw quiz text for the extracted document text
    fn generate<'a>(&'a self, text: &'a str, params: QuizParameters) -> BoxFuture<'a, Result<String>>;
}

/// Sends one completion request per quiz.
///
/// No retries and no request timeout: a generation either completes or
/// fails, and the failure is reported as is.
#[derive(Clone)]
pub struct QuizClient {
    http: reqwest::Client,
    config: CompletionConfig,
}

impl QuizClient {
    pub fn new(config: CompletionConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    pub fn with_http_client(config: CompletionConfig, http: reqwest::Client) -> Self {
        Self { http, config }
    }

    /// Full URL of the variant's endpoint
    pub fn endpoint(&self) -> String {
        format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.variant.endpoint_path()
        )
    }

    /// Ask the endpoint for quiz questions about `text`
    pub async fn generate_quiz(&self, text: &str, params: &QuizParameters) -> Result<String> {
        let prompt = build_prompt(text, params);
        let body = build_request_body(self.config.variant, prompt);
        let url = self.endpoint();

        tracing::info!(
            variant = %self.config.variant,
            difficulty = %params.difficulty,
            question_type = %params.question_type,
            text_chars = text.len(),
            "requesting quiz"
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "completion endpoint returned an error");
            return Err(Error::RemoteRequest {
                status: status.as_u16(),
                body,
            });
        }

        let payload: Value = response.json().await.map_err(|e| Error::MalformedCompletion {
            reason: format!("response is not JSON: {}", e),
        })?;

        extract_completion(self.config.variant, &payload)
    }
}

impl QuizGenerator for QuizClient {
    fn generate<'a>(&'a self, text: &'a str, params: QuizParameters) -> BoxFuture<'a, Result<String>> {
        Box::pin(async move { self.generate_quiz(text, &params).await })
    }
}
