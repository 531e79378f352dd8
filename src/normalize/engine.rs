//! The full normalization pipeline.
//!
//! sentence → [`SentenceConverter`] → [`infer_region`] → [`FallbackGate`] →
//! [`TranslationResponse`]. Only the fallback branch awaits anything; the rest
//! is a pure function of the sentence and the shared, read-only index.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::SaturiConfig;
use crate::dictionary::index::DialectIndex;
use crate::error::{Result, SaturiError};
use crate::matching::matcher::{FuzzyMatcher, WordMatcher};
use crate::normalize::converter::{ConversionResult, SentenceConverter};
use crate::normalize::fallback::{FallbackDecision, FallbackGate, clean_fallback_text};
use crate::normalize::region::infer_region;
use crate::translator::Translator;

/// Final result for one sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResponse {
    /// The sentence as received.
    pub original: String,
    /// The standardized sentence.
    pub converted: String,
    /// Inferred region tag, or `"unknown"`.
    pub region: String,
}

/// Normalizes dialect sentences against a shared dictionary.
///
/// The index is built once and shared through an [`Arc`]; a `Normalizer` can
/// be cloned cheaply and used from many tasks at once.
#[derive(Clone)]
pub struct Normalizer {
    index: Arc<DialectIndex>,
    matcher: Arc<dyn WordMatcher>,
    translator: Arc<dyn Translator>,
    fallback_timeout: Duration,
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer")
            .field("entries", &self.index.len())
            .field("translator", &self.translator.name())
            .field("fallback_timeout", &self.fallback_timeout)
            .finish()
    }
}

impl Normalizer {
    /// Create a normalizer with the default matcher and a 30 second fallback timeout.
    pub fn new(index: Arc<DialectIndex>, translator: Arc<dyn Translator>) -> Self {
        Self::with_config(index, translator, &SaturiConfig::default())
    }

    /// Create a normalizer from configuration.
    pub fn with_config(
        index: Arc<DialectIndex>,
        translator: Arc<dyn Translator>,
        config: &SaturiConfig,
    ) -> Self {
        Normalizer {
            index,
            matcher: Arc::new(FuzzyMatcher::from_config(&config.matcher)),
            translator,
            fallback_timeout: config.fallback.timeout(),
        }
    }

    /// Replace the word matcher.
    pub fn with_matcher(mut self, matcher: Arc<dyn WordMatcher>) -> Self {
        self.matcher = matcher;
        self
    }

    /// Set the upper bound for a single fallback call.
    pub fn with_fallback_timeout(mut self, timeout: Duration) -> Self {
        self.fallback_timeout = timeout;
        self
    }

    /// The shared dictionary index.
    pub fn index(&self) -> &DialectIndex {
        &self.index
    }

    /// Dictionary-only conversion of a sentence.
    pub fn convert(&self, sentence: &str) -> ConversionResult {
        SentenceConverter::new(&self.index, self.matcher.as_ref()).convert(sentence)
    }

    /// Normalize a sentence, calling the translator when a token is unresolved.
    ///
    /// The region always comes from the dictionary matches, whichever branch
    /// produced the converted text. A failing or slow translator fails the
    /// request with [`SaturiError::FallbackUnavailable`].
    pub async fn normalize(&self, sentence: &str) -> Result<TranslationResponse> {
        let conversion = self.convert(sentence);
        let region = infer_region(&conversion.matched_dialect_terms, &self.index);

        let converted = match FallbackGate::decide(&conversion) {
            FallbackDecision::UseDictionary => conversion.converted_text,
            FallbackDecision::UseFallback => {
                log::warn!(
                    "Some words were not found in the dictionary, using {} fallback",
                    self.translator.name()
                );
                self.translate_with_timeout(sentence).await?
            }
        };

        Ok(TranslationResponse {
            original: sentence.to_string(),
            converted,
            region,
        })
    }

    async fn translate_with_timeout(&self, sentence: &str) -> Result<String> {
        let call = self.translator.translate(sentence);

        match tokio::time::timeout(self.fallback_timeout, call).await {
            Ok(Ok(text)) => Ok(clean_fallback_text(&text)),
            Ok(Err(err @ SaturiError::FallbackUnavailable(_))) => {
                log::warn!("Fallback translation failed: {err}");
                Err(err)
            }
            Ok(Err(err)) => {
                log::warn!("Fallback translation failed: {err}");
                Err(SaturiError::fallback_service(err.to_string()))
            }
            Err(_) => {
                log::warn!(
                    "Fallback translation timed out after {:?}",
                    self.fallback_timeout
                );
                Err(SaturiError::fallback_timeout(self.fallback_timeout))
            }
        }
    }
}
