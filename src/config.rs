//! Runtime configuration for dictionary loading, matching and fallback.
//!
//! Every section has defaults, so an empty JSON object `{}` is a complete
//! configuration. Values from a file are usually overridden afterwards by
//! command line flags.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SaturiError};
use crate::matching::matcher::SimilarityMetric;

/// Default similarity cutoff used by the word matcher.
pub const DEFAULT_CUTOFF: f64 = 0.6;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaturiConfig {
    /// Dictionary source settings.
    pub dictionary: DictionaryConfig,
    /// Word matcher settings.
    pub matcher: MatcherConfig,
    /// External translation settings.
    pub fallback: FallbackConfig,
}

/// Where and how the dictionary table is read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Path to the comma separated dictionary file.
    pub path: PathBuf,
    /// WHATWG encoding label of the file.
    pub encoding: String,
    /// Field delimiter.
    pub delimiter: char,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        DictionaryConfig {
            path: PathBuf::from("dialect_dict.csv"),
            encoding: "euc-kr".to_string(),
            delimiter: ',',
        }
    }
}

/// Configuration for approximate word matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Minimum similarity (inclusive) for a token to match a dialect term.
    pub cutoff: f64,
    /// Similarity metric.
    pub metric: SimilarityMetric,
    /// Dictionaries with at least this many entries are scanned in parallel.
    pub parallel_threshold: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        MatcherConfig {
            cutoff: DEFAULT_CUTOFF,
            metric: SimilarityMetric::default(),
            parallel_threshold: 4096,
        }
    }
}

/// Configuration for the external translation fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackConfig {
    /// Whether the external translator may be called at all.
    pub enabled: bool,
    /// Chat model identifier.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Chat completions endpoint.
    pub endpoint: String,
    /// Upper bound for a single translation call, in seconds.
    pub timeout_secs: u64,
    /// Environment variable holding the API key.
    pub api_key_env: String,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        FallbackConfig {
            enabled: true,
            model: "gpt-4o".to_string(),
            temperature: 0.5,
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            timeout_secs: 30,
            api_key_env: "OPENAI_API_KEY".to_string(),
        }
    }
}

impl FallbackConfig {
    /// Timeout applied around every translation call.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Read the API key from the configured environment variable.
    pub fn api_key_from_env(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

impl SaturiConfig {
    /// Load a configuration from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SaturiError::invalid_config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: SaturiConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that all values are within their allowed ranges.
    pub fn validate(&self) -> Result<()> {
        let cutoff = self.matcher.cutoff;
        if !(0.0..=1.0).contains(&cutoff) {
            return Err(SaturiError::invalid_config(format!(
                "matcher.cutoff must be within [0, 1], got {cutoff}"
            )));
        }

        if encoding_rs::Encoding::for_label(self.dictionary.encoding.as_bytes()).is_none() {
            return Err(SaturiError::invalid_config(format!(
                "unknown dictionary encoding: {}",
                self.dictionary.encoding
            )));
        }

        if !self.dictionary.delimiter.is_ascii() {
            return Err(SaturiError::invalid_config(
                "dictionary.delimiter must be a single ASCII character",
            ));
        }

        if self.fallback.timeout_secs == 0 {
            return Err(SaturiError::invalid_config(
                "fallback.timeout_secs must be greater than zero",
            ));
        }

        Ok(())
    }
}
