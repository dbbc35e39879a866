//! Completion providers
//!
//! The filter only ever asks a completion provider one question: which words
//! in a given text look obscene. The trait keeps the transport and the model
//! choice out of the classification core.

pub mod openai;

pub use openai::OpenAiCompletionClient;

use async_trait::async_trait;

use crate::utils::error::Result;

/// A text-completion service able to propose suspicious word candidates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Returns the words in `text` the service judges potentially obscene.
    /// The response is treated as plain whitespace-separated tokens; an
    /// empty list means the service found nothing.
    async fn propose_suspicious_words(&self, text: &str) -> Result<Vec<String>>;
}
