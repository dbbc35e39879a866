//! Domain models shared across services and stores.

pub mod word;

pub use word::{ObsceneWordEntry, SuspiciousWordEntry, SuspiciousWordStatus};
