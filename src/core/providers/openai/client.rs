//! OpenAI-compatible completion client.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::config::CompletionConfig;
use crate::core::providers::CompletionClient;
use crate::utils::error::{FilterError, Result};

/// The whole prompt. The response is parsed as space-separated tokens, so
/// the instruction insists on words only, no explanations.
pub const SUSPICIOUS_WORDS_INSTRUCTION: &str = "Find words in the text that may be obscene. \
     Print ONLY the found words separated by spaces, without explanations.";

/// Client for any chat-completions endpoint speaking the OpenAI format.
#[derive(Debug, Clone)]
pub struct OpenAiCompletionClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiCompletionClient {
    /// Create a client from configuration. Fails when no API key is set or
    /// the HTTP client cannot be constructed.
    pub fn new(config: &CompletionConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| FilterError::config("completion api_key is not set"))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            api_key,
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompletionClient {
    async fn propose_suspicious_words(&self, text: &str) -> Result<Vec<String>> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::user(SUSPICIOUS_WORDS_INSTRUCTION),
                ChatMessage::user(text),
            ],
            temperature: 0.0,
            top_p: 1.0,
        };

        let url = format!("{}/chat/completions", self.base_url);
        debug!(model = %self.model, "requesting suspicious word proposals");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let completion: ChatCompletionResponse = response.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| FilterError::completion("response contained no message content"))?;

        Ok(content.split_whitespace().map(str::to_owned).collect())
    }
}
