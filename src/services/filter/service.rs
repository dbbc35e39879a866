//! Classification service orchestrating transformations, normalization,
//! trigram matching and the word store.
//!
//! A word is judged obscene when any de-obfuscation hypothesis, after
//! normalization, lands close enough to a dictionary entry by trigram
//! similarity. "Close enough" means the score beats the configured
//! indicator and the entry's best score so far; every such match also
//! ratchets the entry's cached best score, so classification is not a pure
//! read.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::FilterConfig;
use crate::core::models::ObsceneWordEntry;
use crate::core::normalize;
use crate::core::providers::CompletionClient;
use crate::core::transform::{Transformation, default_transformations};
use crate::core::trigram;
use crate::storage::WordStore;
use crate::utils::error::{FilterError, Result};

/// Classifies words and texts against the obscene word dictionary and keeps
/// the dictionary and the suspicious word queue up to date.
#[derive(Clone)]
pub struct ObscenityFilterService {
    obscenity_indicator: f32,
    suspicious_words_check: bool,
    harvest_timeout: Duration,
    transformations: Vec<Transformation>,
    store: Arc<dyn WordStore>,
    completion: Option<Arc<dyn CompletionClient>>,
}

impl ObscenityFilterService {
    /// Create a service over the given store.
    ///
    /// Fails fast when the obscenity indicator is outside (0, 1), or when
    /// suspicious word checking is requested without a completion client.
    pub fn new(
        config: &FilterConfig,
        store: Arc<dyn WordStore>,
        completion: Option<Arc<dyn CompletionClient>>,
    ) -> Result<Self> {
        if !(config.obscenity_indicator > 0.0 && config.obscenity_indicator < 1.0) {
            return Err(FilterError::config(format!(
                "obscenity_indicator must lie strictly between 0 and 1, got {}",
                config.obscenity_indicator
            )));
        }
        if config.suspicious_words_check && completion.is_none() {
            return Err(FilterError::config(
                "suspicious_words_check is enabled but no completion client was supplied",
            ));
        }

        Ok(Self {
            obscenity_indicator: config.obscenity_indicator,
            suspicious_words_check: config.suspicious_words_check,
            harvest_timeout: Duration::from_secs(config.harvest_timeout_secs),
            transformations: default_transformations(),
            store,
            completion,
        })
    }

    /// Replace the default de-obfuscation pipeline.
    pub fn with_transformations(mut self, transformations: Vec<Transformation>) -> Self {
        self.transformations = transformations;
        self
    }

    /// The store this service classifies against.
    pub fn store(&self) -> Arc<dyn WordStore> {
        Arc::clone(&self.store)
    }

    /// See [`normalize::normalize_word`].
    pub fn normalize_word(&self, word: &str) -> String {
        normalize::normalize_word(word)
    }

    /// See [`normalize::normalize_text`].
    pub fn normalize_text(&self, text: &str) -> String {
        normalize::normalize_text(text)
    }

    /// Whether a single word is obscene under any de-obfuscation hypothesis.
    pub async fn is_word_obscene(&self, word: &str) -> Result<bool> {
        let entries = self.store.all_obscene_words().await?;
        self.check_word(word, &entries).await
    }

    /// Whether any space-separated token of `text` is obscene.
    ///
    /// When the text comes out clean and suspicious word checking is
    /// enabled, candidate harvesting runs as a detached task: the verdict
    /// returns immediately and a harvesting failure only ever shows up in
    /// the logs.
    pub async fn is_text_obscene(&self, text: &str) -> Result<bool> {
        let entries = self.store.all_obscene_words().await?;

        for word in text.split(' ') {
            if self.check_word(word, &entries).await? {
                return Ok(true);
            }
        }

        if self.suspicious_words_check {
            self.spawn_harvest(text);
        }
        Ok(false)
    }

    /// The closest dictionary entries for every token of `text`.
    ///
    /// The result maps each raw token to its top `limit` matches. Repeated
    /// tokens overwrite earlier results; callers that care about duplicate
    /// tokens should deduplicate beforehand.
    pub async fn get_similar_words(
        &self,
        text: &str,
        limit: usize,
    ) -> Result<HashMap<String, Vec<(ObsceneWordEntry, f32)>>> {
        let entries = self.store.all_obscene_words().await?;
        let mut similar = HashMap::new();

        for word in text.split(' ') {
            let normalized = normalize::normalize_word(word);
            similar.insert(word.to_owned(), trigram::best_match(&normalized, &entries, limit));
        }
        Ok(similar)
    }

    /// Add a word to the dictionary, or refresh its normalized form when it
    /// already exists. The cached best similarity is never touched here.
    pub async fn create_obscene_word(&self, word: &str) -> Result<ObsceneWordEntry> {
        let normalized = normalize::normalize_word(word);
        let entry = self.store.upsert_obscene_word(word, &normalized).await?;

        debug!(word, normalized = %entry.normalized_value, "obscene word stored");
        Ok(entry)
    }

    /// Bulk-import dictionary words from CSV. Every non-empty field of every
    /// record becomes a dictionary word; returns how many were imported.
    pub async fn import_obscene_words<R: std::io::Read + Send>(&self, reader: R) -> Result<u64> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut imported = 0;
        for record in csv_reader.records() {
            let record = record?;
            for field in record.iter() {
                let word = field.trim();
                if word.is_empty() {
                    continue;
                }
                self.create_obscene_word(word).await?;
                imported += 1;
            }
        }

        info!(imported, "dictionary import finished");
        Ok(imported)
    }

    /// Ask the completion service for suspicious word candidates in `text`
    /// and queue the new ones for moderation. Returns the number of freshly
    /// queued words.
    ///
    /// This is the synchronous form of the side channel that
    /// [`is_text_obscene`](Self::is_text_obscene) dispatches in the
    /// background.
    pub async fn harvest_suspicious_words(&self, text: &str) -> Result<u64> {
        let client = self.completion.as_ref().ok_or_else(|| {
            FilterError::config("suspicious word harvesting requires a completion client")
        })?;

        let proposals = tokio::time::timeout(
            self.harvest_timeout,
            client.propose_suspicious_words(text),
        )
        .await
        .map_err(|_| FilterError::timeout("completion service did not answer in time"))??;

        let words: HashSet<String> = proposals
            .into_iter()
            .map(|word| word.trim().to_owned())
            .filter(|word| !word.is_empty())
            .collect();

        if words.is_empty() {
            return Ok(0);
        }
        self.store.bulk_insert_suspicious(words).await
    }

    /// One de-obfuscation hypothesis after another; the first match wins.
    async fn check_word(&self, word: &str, entries: &[ObsceneWordEntry]) -> Result<bool> {
        for transformation in &self.transformations {
            let candidate = normalize::normalize_word(&transformation(word));
            if candidate.is_empty() {
                continue;
            }
            if self.matches_dictionary(&candidate, entries).await? {
                debug!(word, %candidate, "word classified as obscene");
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// The match rule: beat the indicator and the entry's best score so far.
    /// Matching entries get their cached best score ratcheted up.
    async fn matches_dictionary(
        &self,
        candidate: &str,
        entries: &[ObsceneWordEntry],
    ) -> Result<bool> {
        let mut matched = false;

        for entry in entries {
            let score = trigram::similarity(candidate, &entry.normalized_value);
            if score > self.obscenity_indicator
                && entry.similarity.is_none_or(|best| score > best)
            {
                self.store.update_best_similarity(entry.id, score).await?;
                matched = true;
            }
        }
        Ok(matched)
    }

    fn spawn_harvest(&self, text: &str) {
        let service = self.clone();
        let text = text.to_owned();

        tokio::spawn(async move {
            match service.harvest_suspicious_words(&text).await {
                Ok(queued) => debug!(queued, "suspicious word harvesting finished"),
                Err(err) => warn!(error = %err, "suspicious word harvesting failed"),
            }
        });
    }
}

impl fmt::Debug for ObscenityFilterService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObscenityFilterService")
            .field("obscenity_indicator", &self.obscenity_indicator)
            .field("suspicious_words_check", &self.suspicious_words_check)
            .field("harvest_timeout", &self.harvest_timeout)
            .field("transformations", &self.transformations.len())
            .finish_non_exhaustive()
    }
}
