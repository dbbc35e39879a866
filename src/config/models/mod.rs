//! Configuration models.

pub mod completion;
pub mod filter;
pub mod storage;

pub use completion::CompletionConfig;
pub use filter::FilterConfig;
pub use storage::{DatabaseConfig, StorageConfig};
