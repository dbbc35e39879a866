//! Database entities.

pub mod obscene_word;
pub mod suspicious_word;

pub use obscene_word::Entity as ObsceneWord;
pub use suspicious_word::Entity as SuspiciousWord;
