//! Approximate matching of a single token against the dictionary.

use std::cmp::Ordering;

use clap::ValueEnum;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_CUTOFF, MatcherConfig};
use crate::dictionary::entry::DialectEntry;
use crate::dictionary::index::DialectIndex;
use crate::matching::levenshtein::{levenshtein_similarity, levenshtein_similarity_bound};
use crate::matching::similarity::{quick_ratio, real_quick_ratio, sequence_ratio_chars};

/// Similarity metric used to compare a token with dialect terms.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityMetric {
    /// Matched characters over total characters (longest matching blocks)
    #[default]
    Sequence,
    /// One minus the edit distance over the longer length
    Levenshtein,
}

impl SimilarityMetric {
    /// Score `token` against `term`, in `[0, 1]`.
    pub fn score(&self, term: &[char], token: &[char]) -> f64 {
        match self {
            SimilarityMetric::Sequence => sequence_ratio_chars(term, token),
            SimilarityMetric::Levenshtein => levenshtein_similarity(term, token),
        }
    }

    /// Score only when the result can reach `cutoff`.
    ///
    /// Cheap upper bounds are checked first; they skip work but never change
    /// which pairs pass.
    pub fn score_at_least(&self, term: &[char], token: &[char], cutoff: f64) -> Option<f64> {
        let plausible = match self {
            SimilarityMetric::Sequence => {
                real_quick_ratio(term, token) >= cutoff && quick_ratio(term, token) >= cutoff
            }
            SimilarityMetric::Levenshtein => levenshtein_similarity_bound(term, token) >= cutoff,
        };
        if !plausible {
            return None;
        }

        let score = self.score(term, token);
        (score >= cutoff).then_some(score)
    }
}

/// A dictionary entry that a token matched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordMatch<'a> {
    /// The matched entry.
    pub entry: &'a DialectEntry,
    /// Similarity between the token and the entry's dialect term.
    pub score: f64,
    /// Position of the entry in index order.
    pub position: usize,
}

impl<'a> WordMatch<'a> {
    /// The matched dialect term.
    pub fn dialect(&self) -> &'a str {
        &self.entry.dialect
    }

    /// The standard term of the matched entry.
    pub fn standard(&self) -> &'a str {
        &self.entry.standard
    }

    /// Higher score wins; equal scores go to the earlier index position.
    fn better(self, other: Self) -> Self {
        match other.score.partial_cmp(&self.score) {
            Some(Ordering::Greater) => other,
            Some(Ordering::Equal) if other.position < self.position => other,
            _ => self,
        }
    }
}

/// Finds the dictionary term closest to a token.
///
/// Implementations decide how similarity is measured and searched; the
/// sentence converter only relies on this trait.
pub trait WordMatcher: Send + Sync {
    /// Best matching entry for `token`, or `None` when nothing is close enough.
    fn best_match<'a>(&self, token: &str, index: &'a DialectIndex) -> Option<WordMatch<'a>>;
}

/// Exhaustive scan over all dialect terms with a similarity cutoff.
///
/// Every term is scored, so a lookup costs O(entries × term length). Large
/// dictionaries are scanned with rayon; results are identical either way.
#[derive(Debug, Clone)]
pub struct FuzzyMatcher {
    cutoff: f64,
    metric: SimilarityMetric,
    parallel_threshold: usize,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FuzzyMatcher {
    /// Create a matcher with cutoff 0.6 and the sequence metric.
    pub fn new() -> Self {
        Self::from_config(&MatcherConfig::default())
    }

    /// Create a matcher from configuration.
    pub fn from_config(config: &MatcherConfig) -> Self {
        FuzzyMatcher {
            cutoff: config.cutoff,
            metric: config.metric,
            parallel_threshold: config.parallel_threshold,
        }
    }

    /// Set the minimum accepted similarity (inclusive).
    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Set the similarity metric.
    pub fn with_metric(mut self, metric: SimilarityMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Set the dictionary size from which scans run in parallel.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// The similarity cutoff.
    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// The similarity metric.
    pub fn metric(&self) -> SimilarityMetric {
        self.metric
    }

    /// All matches at or above the cutoff, best first, at most `limit` of them.
    pub fn candidates<'a>(
        &self,
        token: &str,
        index: &'a DialectIndex,
        limit: usize,
    ) -> Vec<WordMatch<'a>> {
        let token: Vec<char> = token.chars().collect();

        let mut matches: Vec<WordMatch<'a>> = index
            .entries()
            .iter()
            .enumerate()
            .filter_map(|(position, entry)| self.score_entry(&token, position, entry))
            .collect();

        matches.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then(a.position.cmp(&b.position))
        });
        matches.truncate(limit);
        matches
    }

    fn score_entry<'a>(
        &self,
        token: &[char],
        position: usize,
        entry: &'a DialectEntry,
    ) -> Option<WordMatch<'a>> {
        let term: Vec<char> = entry.dialect.chars().collect();
        self.metric
            .score_at_least(&term, token, self.cutoff)
            .map(|score| WordMatch {
                entry,
                score,
                position,
            })
    }
}

impl WordMatcher for FuzzyMatcher {
    fn best_match<'a>(&self, token: &str, index: &'a DialectIndex) -> Option<WordMatch<'a>> {
        let token: Vec<char> = token.chars().collect();
        let score_at = |(position, entry): (usize, &'a DialectEntry)| {
            self.score_entry(&token, position, entry)
        };

        if index.len() >= self.parallel_threshold {
            index
                .entries()
                .par_iter()
                .enumerate()
                .filter_map(score_at)
                .reduce_with(WordMatch::better)
        } else {
            index
                .entries()
                .iter()
                .enumerate()
                .filter_map(score_at)
                .reduce(WordMatch::better)
        }
    }
}

/// Best match for `token` using the sequence metric and the given cutoff.
pub fn best_match<'a>(token: &str, index: &'a DialectIndex, cutoff: f64) -> Option<WordMatch<'a>> {
    FuzzyMatcher::new().with_cutoff(cutoff).best_match(token, index)
}

/// Best match for `token` with the default cutoff of 0.6.
pub fn best_match_default<'a>(token: &str, index: &'a DialectIndex) -> Option<WordMatch<'a>> {
    best_match(token, index, DEFAULT_CUTOFF)
}
