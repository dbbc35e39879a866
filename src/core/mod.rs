//! Core building blocks of the filter
//!
//! Everything algorithmic lives here: domain models, normalization,
//! de-obfuscation transformations, trigram similarity, and the completion
//! provider used to harvest suspicious word candidates.

pub mod models;
pub mod normalize;
pub mod providers;
pub mod transform;
pub mod trigram;
