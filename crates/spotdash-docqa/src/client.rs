//! HTTP client for the generative-language answers endpoint.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::prompt::build_prompt;
use crate::DocQaError;

/// Sampling parameters sent with every request. Matched to the values the
/// product has always used; not user-tunable.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRequestConfig {
    pub temperature: f64,
    pub top_k: u32,
    pub top_p: f64,
    pub max_output_tokens: u32,
}

impl Default for AnswerRequestConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 2048,
        }
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: AnswerRequestConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Client for the answers endpoint.
///
/// The endpoint URL is injected whole, so tests can point at a mock
/// server. The API key is appended as a query parameter server side.
pub struct AnswerClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    config: AnswerRequestConfig,
}

impl AnswerClient {
    /// Creates a client with the configured endpoint, key, and timeout.
    ///
    /// # Errors
    ///
    /// Returns [`DocQaError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        endpoint: &str,
        api_key: Option<&str>,
        timeout_secs: u64,
    ) -> Result<Self, DocQaError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("spotdash/0.1 (spot-analytics)")
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            api_key: api_key.map(str::to_owned),
            config: AnswerRequestConfig::default(),
        })
    }

    /// Answers one question about one document's extracted text.
    ///
    /// # Errors
    ///
    /// [`DocQaError::Http`] on transport failure,
    /// [`DocQaError::ApiStatus`] on a non-success response, and
    /// [`DocQaError::EmptyAnswer`] if the response carries no candidate
    /// text.
    pub async fn ask(&self, document_text: &str, question: &str) -> Result<String, DocQaError> {
        let prompt = build_prompt(document_text, question);
        let body = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: &prompt }],
            }],
            generation_config: self.config,
        };

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key.as_str())]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "answers API returned non-success");
            return Err(DocQaError::ApiStatus {
                status: status.as_u16(),
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        let answer = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .filter(|text| !text.trim().is_empty())
            .ok_or(DocQaError::EmptyAnswer)?;
        Ok(answer)
    }
}
