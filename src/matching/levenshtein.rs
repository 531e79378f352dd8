//! Levenshtein distance and the similarity ratio derived from it.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
/// This is the minimum number of single-character edits (insertions, deletions, or substitutions)
/// required to change one word into another.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    levenshtein_distance_chars(&s1_chars, &s2_chars)
}

/// [`levenshtein_distance`] over pre-split character slices.
pub fn levenshtein_distance_chars(s1: &[char], s2: &[char]) -> usize {
    let len1 = s1.len();
    let len2 = s2.len();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    // Use only two rows for space optimization
    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for i in 1..=len1 {
        curr_row[0] = i;

        for j in 1..=len2 {
            let cost = if s1[i - 1] == s2[j - 1] { 0 } else { 1 };

            curr_row[j] = min(
                min(
                    prev_row[j] + 1,     // deletion
                    curr_row[j - 1] + 1, // insertion
                ),
                prev_row[j - 1] + cost, // substitution
            );
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Similarity in `[0, 1]` derived from the edit distance: `1 - d / max(len)`.
///
/// Identical strings (including two empty strings) score 1.0; strings with no
/// character in common at any aligned position score 0.0.
pub fn levenshtein_similarity(s1: &[char], s2: &[char]) -> f64 {
    let max_len = s1.len().max(s2.len());
    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein_distance_chars(s1, s2);
    1.0 - (distance as f64 / max_len as f64)
}

/// Upper bound of [`levenshtein_similarity`] from the length difference alone.
pub fn levenshtein_similarity_bound(s1: &[char], s2: &[char]) -> f64 {
    let max_len = s1.len().max(s2.len());
    if max_len == 0 {
        return 1.0;
    }

    1.0 - (s1.len().abs_diff(s2.len()) as f64 / max_len as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("hello", ""), 5);
        assert_eq!(levenshtein_distance("", "world"), 5);
        assert_eq!(levenshtein_distance("hello", "hello"), 0);
        assert_eq!(levenshtein_distance("hello", "hallo"), 1);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("머라카노", "머라카나"), 1);
    }

    #[test]
    fn test_levenshtein_similarity() {
        assert_eq!(levenshtein_similarity(&chars("가가"), &chars("가가")), 1.0);
        assert_eq!(levenshtein_similarity(&chars(""), &chars("")), 1.0);
        assert_eq!(levenshtein_similarity(&chars("abc"), &chars("xyz")), 0.0);
        assert_eq!(
            levenshtein_similarity(&chars("머라카노"), &chars("머라카나")),
            0.75
        );
    }

    #[test]
    fn test_bound_never_below_similarity() {
        let pairs = [("kitten", "sitting"), ("가", "가가가"), ("abc", "cba")];
        for (a, b) in pairs {
            let (ca, cb) = (chars(a), chars(b));
            assert!(levenshtein_similarity_bound(&ca, &cb) >= levenshtein_similarity(&ca, &cb));
        }
    }
}
