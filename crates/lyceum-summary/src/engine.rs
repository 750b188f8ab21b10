//! Summary engines: the template renderer that always works, plus an optional
//! OpenAI-backed engine that has a model write the parent email.
//!
//! Engines never read the process environment themselves. The API key is an
//! explicit configuration input; `ScribeConfig::resolved_api_key` is the single
//! place a key is resolved, and it happens before an engine is constructed.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

use lyceum_core::TranscriptAnalysis;

use crate::config::ScribeConfig;
use crate::error::{SummaryError, SummaryResult};
use crate::prompts::{parent_email_user_prompt, PARENT_EMAIL_SYSTEM};
use crate::report::SummaryMethod;
use crate::template::render_parent_email;

/// Chat model used when the configuration does not name one.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
/// OpenAI-compatible API base used when the configuration does not name one.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Backend for turning one analysis record into a parent email.
#[async_trait]
pub trait SummaryEngine: Send + Sync {
    /// Short engine name for logs.
    fn name(&self) -> &'static str;
    /// Method label recorded in the report.
    fn method(&self) -> SummaryMethod;
    /// Produce the full email text. Implementations do not retry.
    async fn generate(&self, analysis: &TranscriptAnalysis) -> SummaryResult<String>;
}

/// Offline engine: renders the email from analysis fields alone.
#[derive(Debug, Default)]
pub struct TemplateEngine;

impl TemplateEngine {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SummaryEngine for TemplateEngine {
    fn name(&self) -> &'static str {
        "template"
    }

    fn method(&self) -> SummaryMethod {
        SummaryMethod::TemplateBased
    }

    async fn generate(&self, analysis: &TranscriptAnalysis) -> SummaryResult<String> {
        Ok(render_parent_email(analysis))
    }
}

// OpenAI-compatible chat request/response
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Deserialize)]
struct ChatMessageResponse {
    content: String,
}

/// Remote engine: an OpenAI-compatible chat completion writes the email from
/// the structured session prompt.
pub struct OpenAiEngine {
    api_key: String,
    api_base: String,
    model: String,
    client: reqwest::Client,
}

impl OpenAiEngine {
    /// Create an engine with an explicit API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            api_key: api_key.into().trim().to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            client,
        }
    }

    /// Set the chat model (e.g. `gpt-4o-mini`).
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Point at a different OpenAI-compatible base URL (no trailing slash needed).
    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl SummaryEngine for OpenAiEngine {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn method(&self) -> SummaryMethod {
        SummaryMethod::AiEnhanced
    }

    async fn generate(&self, analysis: &TranscriptAnalysis) -> SummaryResult<String> {
        let url = format!("{}/chat/completions", self.api_base.trim_end_matches('/'));
        let body = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: PARENT_EMAIL_SYSTEM.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: parent_email_user_prompt(analysis),
                },
            ],
            temperature: Some(0.7),
            max_tokens: Some(1800),
        };

        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| SummaryError::Api(format!("chat request failed: {}", e)))?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(SummaryError::Api(format!(
                "chat API error {}: {}",
                status, body
            )));
        }

        let parsed: ChatResponse = res
            .json()
            .await
            .map_err(|e| SummaryError::Parse(format!("chat response parse failed: {}", e)))?;

        parsed
            .choices
            .first()
            .map(|c| c.message.content.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| SummaryError::Parse("chat response contained no content".to_string()))
    }
}

/// Pick the engine for this run.
/// Priority: (1) `TemplateEngine` when offline mode is set, (2) `OpenAiEngine`
/// when a key is configured, (3) `TemplateEngine`.
pub fn create_summary_engine(config: &ScribeConfig) -> Box<dyn SummaryEngine> {
    if config.offline {
        info!("offline mode set; using template summary engine");
        return Box::new(TemplateEngine::new());
    }
    match config.resolved_api_key() {
        Some(key) => {
            info!("using {} for enhanced summary generation", config.model);
            Box::new(
                OpenAiEngine::new(key)
                    .with_model(&config.model)
                    .with_api_base(&config.api_base),
            )
        }
        None => {
            info!("no API key configured; using template summary engine");
            Box::new(TemplateEngine::new())
        }
    }
}
