//! Completion service configuration

use serde::{Deserialize, Serialize};

/// Settings for the OpenAI-compatible completion endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// API key. Required as soon as suspicious word checking is enabled
    #[serde(default)]
    pub api_key: Option<String>,

    /// Endpoint base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model asked to propose suspicious words
    #[serde(default = "default_model")]
    pub model: String,

    /// HTTP request timeout, in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            request_timeout: default_request_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_owned()
}

fn default_model() -> String {
    "gpt-4o-mini".to_owned()
}

fn default_request_timeout() -> u64 {
    10
}
