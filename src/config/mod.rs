//! Configuration management for the filter
//!
//! This module handles loading and validation of all filter configuration.

pub mod models;

pub use models::*;

use std::path::Path;

use tracing::{debug, info};

use crate::utils::error::{FilterError, Result};

/// Main configuration struct for the filter
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Config {
    /// Classification configuration
    #[serde(default)]
    pub filter: FilterConfig,
    /// Completion service configuration
    #[serde(default)]
    pub completion: CompletionConfig,
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("loading configuration from {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| FilterError::config(format!("failed to read config file: {e}")))?;

        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| FilterError::config(format!("failed to parse config: {e}")))?;

        config.validate()?;

        debug!("configuration loaded");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        debug!("loading configuration from environment variables");

        let mut config = Self::default();

        if let Ok(indicator) = std::env::var("OBSCENITY_INDICATOR") {
            config.filter.obscenity_indicator = indicator
                .parse()
                .map_err(|e| FilterError::config(format!("invalid OBSCENITY_INDICATOR: {e}")))?;
        }
        if let Ok(flag) = std::env::var("SUSPICIOUS_WORDS_CHECK") {
            config.filter.suspicious_words_check = flag
                .parse()
                .map_err(|e| FilterError::config(format!("invalid SUSPICIOUS_WORDS_CHECK: {e}")))?;
        }
        if let Ok(timeout) = std::env::var("HARVEST_TIMEOUT_SECS") {
            config.filter.harvest_timeout_secs = timeout
                .parse()
                .map_err(|e| FilterError::config(format!("invalid HARVEST_TIMEOUT_SECS: {e}")))?;
        }

        if let Ok(api_key) =
            std::env::var("COMPLETION_API_KEY").or_else(|_| std::env::var("OPENAI_API_KEY"))
        {
            config.completion.api_key = Some(api_key);
        }
        if let Ok(base_url) = std::env::var("COMPLETION_BASE_URL") {
            config.completion.base_url = base_url;
        }
        if let Ok(model) = std::env::var("COMPLETION_MODEL") {
            config.completion.model = model;
        }

        if let Ok(url) = std::env::var("DATABASE_URL") {
            config.storage.database.url = url;
        }
        if let Ok(max_connections) = std::env::var("DATABASE_MAX_CONNECTIONS") {
            config.storage.database.max_connections = max_connections
                .parse()
                .map_err(|e| FilterError::config(format!("invalid DATABASE_MAX_CONNECTIONS: {e}")))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let indicator = self.filter.obscenity_indicator;
        if !(indicator > 0.0 && indicator < 1.0) {
            return Err(FilterError::config(format!(
                "obscenity_indicator must lie strictly between 0 and 1, got {indicator}"
            )));
        }

        if self.filter.suspicious_words_check && self.completion.api_key.is_none() {
            return Err(FilterError::config(
                "suspicious_words_check is enabled but completion.api_key is not set",
            ));
        }

        if self.storage.database.url.is_empty() {
            return Err(FilterError::config("storage.database.url cannot be empty"));
        }

        Ok(())
    }
}
