//! Live completion endpoint test.
//!
//! Run with `cargo test -- --ignored` and `OPENAI_API_KEY` set.

use obscenity_rs::config::CompletionConfig;
use obscenity_rs::{CompletionClient, OpenAiCompletionClient};

#[tokio::test]
#[ignore = "requires OPENAI_API_KEY and network access"]
async fn live_endpoint_answers_the_suspicious_words_prompt() {
    let api_key = std::env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY must be set");

    let config = CompletionConfig {
        api_key: Some(api_key),
        ..CompletionConfig::default()
    };
    let client = OpenAiCompletionClient::new(&config).unwrap();

    let words = client
        .propose_suspicious_words("Сегодня отличная погода для прогулки")
        .await
        .unwrap();

    // The model decides what counts; the contract is only that the answer
    // parses into plain tokens.
    for word in words {
        assert!(!word.contains(char::is_whitespace));
    }
}
