//! External AI summary collaborator.
//!
//! The collaborator receives a JSON-serializable metrics payload and
//! returns a short narrative. It is the one asynchronous boundary that
//! leaves the process, and it is never allowed to fail the caller:
//! every failure path degrades to [`FALLBACK_SUMMARY`].

use std::future::Future;
use std::time::Duration;

use bizflow_core::error::{BizflowError, BizflowResult};
use serde::Deserialize;
use serde_json::json;

/// Returned whenever the collaborator is unreachable, slow, over quota
/// or produces a malformed response.
pub const FALLBACK_SUMMARY: &str =
    "Unable to generate AI summary at this time. Please check your data manually.";

const PROMPT_PREAMBLE: &str = "Analyze this business productivity data and provide a concise, \
     professional executive summary (under 150 words). Include insights on task completion \
     rates, attendance trends, and team performance.";

/// Summary generation seam. Production uses [`HttpSummaryClient`];
/// tests plug in a canned implementation.
pub trait SummaryGenerator: Send + Sync {
    /// Produce a narrative for the payload. Infallible by contract —
    /// implementations must degrade internally.
    fn generate(&self, payload: &serde_json::Value) -> impl Future<Output = String> + Send;
}

/// Configuration for the HTTP summary client.
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    /// Text-generation endpoint, e.g. a Gemini `generateContent` URL.
    pub endpoint: String,
    pub api_key: String,
    /// Hard cap on the round trip before the fallback kicks in.
    pub timeout: Duration,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent".into(),
            api_key: String::new(),
            timeout: Duration::from_secs(10),
        }
    }
}

// Response shape of a `generateContent` call, reduced to the fields we
// read.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

/// Reqwest-backed summary client.
pub struct HttpSummaryClient {
    client: reqwest::Client,
    config: SummaryConfig,
}

impl HttpSummaryClient {
    pub fn new(config: SummaryConfig) -> BizflowResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| BizflowError::ExternalService(format!("http client: {e}")))?;
        Ok(Self { client, config })
    }

    async fn request_summary(&self, payload: &serde_json::Value) -> Result<String, String> {
        let prompt = format!("{PROMPT_PREAMBLE}\nData: {payload}");
        let body = json!({
            "contents": [
                { "parts": [ { "text": prompt } ] }
            ]
        });

        let response = self
            .client
            .post(&self.config.endpoint)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("request failed: {e}"))?;

        if !response.status().is_success() {
            return Err(format!("status {}", response.status()));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| format!("invalid response: {e}"))?;

        let text = parsed
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.trim().to_string())
            .unwrap_or_default();

        if text.is_empty() {
            return Err("empty candidate text".into());
        }
        Ok(text)
    }
}

impl SummaryGenerator for HttpSummaryClient {
    async fn generate(&self, payload: &serde_json::Value) -> String {
        match self.request_summary(payload).await {
            Ok(text) => text,
            Err(reason) => {
                tracing::warn!(%reason, "summary generation failed, using fallback");
                FALLBACK_SUMMARY.to_string()
            }
        }
    }
}
