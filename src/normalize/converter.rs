//! Whole-sentence conversion token by token.

use serde::{Deserialize, Serialize};

use crate::dictionary::index::DialectIndex;
use crate::matching::matcher::WordMatcher;

/// Outcome of converting one sentence with the dictionary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Converted tokens joined with single spaces.
    pub converted_text: String,
    /// True when at least one token found no match at or above the cutoff.
    pub any_word_unresolved: bool,
    /// Dialect term matched by each matching token, in token order.
    pub matched_dialect_terms: Vec<String>,
}

impl ConversionResult {
    /// Whether every token matched a dialect term.
    pub fn fully_resolved(&self) -> bool {
        !self.any_word_unresolved
    }
}

/// Converts sentences by replacing each whitespace-separated token with the
/// standard term of its closest dialect term.
///
/// Tokens without a match are kept unchanged and mark the sentence as
/// unresolved; conversion always runs to the end of the sentence. The output
/// joins tokens with a single space, so runs of whitespace, tabs and newlines
/// in the input collapse.
pub struct SentenceConverter<'a> {
    index: &'a DialectIndex,
    matcher: &'a dyn WordMatcher,
}

impl<'a> SentenceConverter<'a> {
    /// Create a converter over an index and a matcher.
    pub fn new(index: &'a DialectIndex, matcher: &'a dyn WordMatcher) -> Self {
        SentenceConverter { index, matcher }
    }

    /// Convert a sentence.
    pub fn convert(&self, sentence: &str) -> ConversionResult {
        let mut result = ConversionResult::default();
        let mut output: Vec<&str> = Vec::new();

        for token in sentence.split_whitespace() {
            match self.matcher.best_match(token, self.index) {
                Some(found) => {
                    log::debug!(
                        "'{}' matched '{}' ({:.3})",
                        token,
                        found.dialect(),
                        found.score
                    );
                    output.push(found.standard());
                    result
                        .matched_dialect_terms
                        .push(found.dialect().to_string());
                }
                None => {
                    log::debug!("'{token}' has no dictionary match");
                    output.push(token);
                    result.any_word_unresolved = true;
                }
            }
        }

        result.converted_text = output.join(" ");
        result
    }
}

/// Convert `sentence` with the given index and matcher.
pub fn convert(sentence: &str, index: &DialectIndex, matcher: &dyn WordMatcher) -> ConversionResult {
    SentenceConverter::new(index, matcher).convert(sentence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::entry::DialectEntry;
    use crate::matching::matcher::FuzzyMatcher;

    fn gyeongsang_index() -> DialectIndex {
        DialectIndex::from_entries(vec![
            DialectEntry::new("가가", "이렇게", Some("경상".to_string())),
            DialectEntry::new("머라카노", "뭐라고 하는거야", Some("경상".to_string())),
        ])
    }

    #[test]
    fn test_all_tokens_match() {
        let index = gyeongsang_index();
        let result = convert("가가 머라카노", &index, &FuzzyMatcher::new());

        assert_eq!(result.converted_text, "이렇게 뭐라고 하는거야");
        assert!(!result.any_word_unresolved);
        assert!(result.fully_resolved());
        assert_eq!(result.matched_dialect_terms, vec!["가가", "머라카노"]);
    }

    #[test]
    fn test_empty_sentence() {
        let index = gyeongsang_index();
        let result = convert("", &index, &FuzzyMatcher::new());

        assert_eq!(result.converted_text, "");
        assert!(!result.any_word_unresolved);
        assert!(result.matched_dialect_terms.is_empty());

        let result = convert("  \t\n ", &index, &FuzzyMatcher::new());
        assert_eq!(result, ConversionResult::default());
    }

    #[test]
    fn test_unmatched_token_kept_and_flagged() {
        let index = gyeongsang_index();
        let result = convert("학교 가가 간다", &index, &FuzzyMatcher::new());

        assert_eq!(result.converted_text, "학교 이렇게 간다");
        assert!(result.any_word_unresolved);
        assert_eq!(result.matched_dialect_terms, vec!["가가"]);
    }

    #[test]
    fn test_processing_continues_after_failure() {
        let index = gyeongsang_index();
        let result = convert("모름 머라카나", &index, &FuzzyMatcher::new());

        assert!(result.any_word_unresolved);
        assert_eq!(result.converted_text, "모름 뭐라고 하는거야");
        assert_eq!(result.matched_dialect_terms, vec!["머라카노"]);
    }

    #[test]
    fn test_duplicates_kept_in_token_order() {
        let index = gyeongsang_index();
        let result = convert("가가 머라카노 가가", &index, &FuzzyMatcher::new());
        assert_eq!(
            result.matched_dialect_terms,
            vec!["가가", "머라카노", "가가"]
        );
    }

    #[test]
    fn test_whitespace_collapses() {
        let index = gyeongsang_index();
        let result = convert("  가가\t\t머라카노\n", &index, &FuzzyMatcher::new());
        assert_eq!(result.converted_text, "이렇게 뭐라고 하는거야");
    }
}
