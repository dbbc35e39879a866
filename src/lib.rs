//! # obscenity-rs
//!
//! A trigram-based obscenity filtering engine. Free text is classified by
//! comparing its words against a curated dictionary of known-bad words with
//! fuzzy trigram similarity, after both sides go through the same
//! normalization (strip, lowercase, Cyrillic transliteration) and the input
//! additionally runs through a pipeline of de-obfuscation hypotheses
//! (digit look-alikes, stretched characters, Latin/Cyrillic homoglyphs).
//!
//! ## Features
//!
//! - **De-obfuscation pipeline**: catches `"Бaнaн0"`-style disguises without
//!   inflating the dictionary
//! - **Trigram matching**: tolerant to inflections and typos, tuned by a
//!   single similarity threshold
//! - **Pluggable storage**: in-memory store for tests and embedding, SeaORM
//!   store for SQLite/Postgres deployments
//! - **Suspicious word harvesting**: clean texts can be forwarded to an
//!   OpenAI-compatible completion service that proposes candidates for
//!   human moderation
//! - **Moderation workflow**: pending candidates are approved into the
//!   dictionary or declined, exactly once
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use obscenity_rs::config::FilterConfig;
//! use obscenity_rs::{MemoryWordStore, ObscenityFilterService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(MemoryWordStore::new());
//!     let filter = ObscenityFilterService::new(&FilterConfig::default(), store, None)?;
//!
//!     filter.create_obscene_word("Банан").await?;
//!
//!     assert!(filter.is_word_obscene("Бaнaн").await?);
//!     assert!(!filter.is_text_obscene("Помидоры очень вкусные").await?);
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{FilterError, Result};

// Export core functionality
pub use core::models::{ObsceneWordEntry, SuspiciousWordEntry, SuspiciousWordStatus};
pub use core::normalize::{normalize_text, normalize_word};
pub use core::providers::{CompletionClient, OpenAiCompletionClient};
pub use core::transform::{Transformation, default_transformations};
pub use core::trigram::{best_match, similarity};

// Export services and stores
pub use services::filter::ObscenityFilterService;
pub use services::moderation::ModerationService;
pub use storage::{MemoryWordStore, SeaOrmWordStore, WordStore};
