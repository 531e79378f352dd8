//! Approximate word matching against dialect terms.
//!
//! [`matcher::WordMatcher`] is the seam between sentence conversion and the
//! similarity search; [`matcher::FuzzyMatcher`] scores every term with one of
//! the metrics from [`similarity`] or [`levenshtein`].

pub mod levenshtein;
pub mod matcher;
pub mod similarity;

pub use matcher::{FuzzyMatcher, SimilarityMetric, WordMatch, WordMatcher};
