//! Classification configuration

use serde::{Deserialize, Serialize};

/// Settings for the obscenity filter service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Similarity threshold in (0, 1): a word matches a dictionary entry
    /// only when their trigram similarity is strictly above this value
    #[serde(default = "default_obscenity_indicator")]
    pub obscenity_indicator: f32,

    /// Whether clean texts are forwarded to the completion service to
    /// harvest suspicious word candidates
    #[serde(default)]
    pub suspicious_words_check: bool,

    /// Upper bound on a single harvesting round trip, in seconds
    #[serde(default = "default_harvest_timeout_secs")]
    pub harvest_timeout_secs: u64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            obscenity_indicator: default_obscenity_indicator(),
            suspicious_words_check: false,
            harvest_timeout_secs: default_harvest_timeout_secs(),
        }
    }
}

fn default_obscenity_indicator() -> f32 {
    0.6
}

fn default_harvest_timeout_secs() -> u64 {
    10
}
