//! OpenAI-compatible completion provider.

mod client;
mod types;


pub use client::{OpenAiCompletionClient, SUSPICIOUS_WORDS_INSTRUCTION};
