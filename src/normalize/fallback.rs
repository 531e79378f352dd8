//! Decision between the dictionary conversion and the external translator.

use serde::{Deserialize, Serialize};

use crate::normalize::converter::ConversionResult;

/// Quote characters stripped from both ends of a translator answer.
const QUOTE_CHARS: &[char] = &['"', '\'', '“', '”', '‘', '’'];

/// Which source produces the final converted sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackDecision {
    /// Keep the dictionary-based conversion.
    UseDictionary,
    /// Discard the dictionary conversion and translate the original sentence.
    UseFallback,
}

/// Chooses the source of the converted text.
///
/// A single unresolved token is enough to send the whole original sentence to
/// the translator; there is no per-token fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackGate;

impl FallbackGate {
    /// Decide from a conversion result.
    pub fn decide(result: &ConversionResult) -> FallbackDecision {
        if result.any_word_unresolved {
            FallbackDecision::UseFallback
        } else {
            FallbackDecision::UseDictionary
        }
    }
}

/// Clean a translator answer: trim whitespace and surrounding quotes.
pub fn clean_fallback_text(raw: &str) -> String {
    raw.trim()
        .trim_matches(QUOTE_CHARS)
        .trim()
        .to_string()
}
