//! # Client Module: Generative Language API
//!
//! One endpoint, one verb: POST `models/{model}:generateContent` with a
//! single-part text prompt, read the text back out of the first
//! candidate.
//!
//! ## Two Surfaces
//!
//! - [`AssistantClient::generate`] is the honest one: every failure is a
//!   typed [`AssistantError`].
//! - [`AssistantClient::chat`] is the counter-facing one: the shopkeeper
//!   mid-conversation gets [`FALLBACK_REPLY`] instead of an error, and
//!   the real failure goes to the log.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::AssistantConfig;
use crate::context::{chat_prompt, BusinessContext, ResponseTone};
use crate::error::{AssistantError, AssistantResult};

/// What the shopkeeper sees when anything in the chat path fails.
pub const FALLBACK_REPLY: &str =
    "Sorry, I encountered an error processing your request. Please try again.";

// =============================================================================
// Wire Types
// =============================================================================

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

impl<'a> GenerateRequest<'a> {
    fn from_prompt(prompt: &'a str) -> Self {
        GenerateRequest {
            contents: vec![RequestContent { parts: vec![RequestPart { text: prompt }] }],
        }
    }
}

// Every level defaults so a sparse or odd-shaped body parses to "no
// text" instead of a decode error.
#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GenerateResponse {
    /// Concatenated text parts of the first candidate.
    fn first_candidate_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}

// =============================================================================
// Client
// =============================================================================

/// Async client for the Generative Language API.
#[derive(Debug, Clone)]
pub struct AssistantClient {
    http: reqwest::Client,
    config: AssistantConfig,
}

impl AssistantClient {
    /// Builds a client over the given config.
    ///
    /// # Errors
    ///
    /// - [`AssistantError::Http`] when the TLS backend fails to initialize
    pub fn new(config: AssistantConfig) -> AssistantResult<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(AssistantClient { http, config })
    }

    /// Builds a client from environment variables.
    ///
    /// # Errors
    ///
    /// - [`AssistantError::Config`] when `GEMINI_API_KEY` is unset or a
    ///   variable is malformed
    pub fn from_env() -> AssistantResult<Self> {
        Self::new(AssistantConfig::from_env()?)
    }

    /// The model this client is configured for.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Sends one prompt and returns the generated text.
    ///
    /// # Errors
    ///
    /// - [`AssistantError::Http`] when the request never completes
    /// - [`AssistantError::Api`] on a non-success status
    /// - [`AssistantError::EmptyResponse`] when the body parses but
    ///   carries no text
    pub async fn generate(&self, prompt: &str) -> AssistantResult<String> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        );
        debug!(model = %self.config.model, prompt_chars = prompt.len(), "generate request");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&GenerateRequest::from_prompt(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AssistantError::Api { status: status.as_u16(), body });
        }

        let body: GenerateResponse = response.json().await?;
        let text = body.first_candidate_text();
        if text.is_empty() {
            return Err(AssistantError::EmptyResponse);
        }
        debug!(reply_chars = text.len(), "generate response");
        Ok(text)
    }

    /// Answers a shopkeeper question against the current business state.
    ///
    /// Total: every failure is logged and replaced with
    /// [`FALLBACK_REPLY`], so the conversation never dead-ends.
    pub async fn chat(
        &self,
        message: &str,
        context: &BusinessContext,
        tone: ResponseTone,
    ) -> String {
        let prompt = chat_prompt(message, context, tone);
        match self.generate(&prompt).await {
            Ok(reply) => reply,
            Err(error) => {
                warn!(%error, "chat request failed, serving fallback reply");
                FALLBACK_REPLY.to_string()
            }
        }
    }

    /// Runs the trends-analysis prompt, total like [`Self::chat`].
    pub async fn analyze_trends(
        &self,
        metrics: &kirana_core::reports::BusinessMetrics,
        top_sellers: &[String],
        slow_movers: &[String],
        scenarios: &[String],
    ) -> String {
        let prompt = crate::context::trends_prompt(metrics, top_sellers, slow_movers, scenarios);
        match self.generate(&prompt).await {
            Ok(reply) => reply,
            Err(error) => {
                warn!(%error, "trends request failed, serving fallback reply");
                FALLBACK_REPLY.to_string()
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
