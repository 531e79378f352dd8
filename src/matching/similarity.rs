//! Sequence-matcher similarity.
//!
//! The ratio is `2 * M / T`, where `T` is the combined length of both
//! sequences and `M` the number of characters in matching blocks. Matching
//! blocks are found by taking the longest common contiguous run, then
//! recursing on the pieces to its left and right. Strings are compared by
//! Unicode scalar value, so a Hangul syllable counts as one character.

use ahash::AHashMap;

/// Similarity ratio between two strings in `[0, 1]`.
///
/// Returns 1.0 for identical strings (including two empty strings) and 0.0
/// when the strings share no character.
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    sequence_ratio_chars(&a, &b)
}

/// [`sequence_ratio`] over pre-split character slices.
pub fn sequence_ratio_chars(a: &[char], b: &[char]) -> f64 {
    ratio(matching_characters(a, b), a.len() + b.len())
}

/// Upper bound of [`sequence_ratio`] computed from lengths only.
pub fn real_quick_ratio(a: &[char], b: &[char]) -> f64 {
    ratio(a.len().min(b.len()), a.len() + b.len())
}

/// Upper bound of [`sequence_ratio`] from the character multisets, ignoring order.
pub fn quick_ratio(a: &[char], b: &[char]) -> f64 {
    let mut available: AHashMap<char, usize> = AHashMap::with_capacity(b.len());
    for &c in b {
        *available.entry(c).or_insert(0) += 1;
    }

    let mut matches = 0;
    for c in a {
        if let Some(count) = available.get_mut(c)
            && *count > 0
        {
            *count -= 1;
            matches += 1;
        }
    }

    ratio(matches, a.len() + b.len())
}

fn ratio(matches: usize, length: usize) -> f64 {
    if length == 0 {
        1.0
    } else {
        2.0 * matches as f64 / length as f64
    }
}

/// Total size of all matching blocks between `a` and `b`.
pub fn matching_characters(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    // Positions of every character in `b`, ascending.
    let mut b2j: AHashMap<char, Vec<usize>> = AHashMap::new();
    for (j, &c) in b.iter().enumerate() {
        b2j.entry(c).or_default().push(j);
    }

    let mut total = 0;
    let mut queue = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = queue.pop() {
        let (i, j, size) = longest_match(a, &b2j, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }

        total += size;
        if alo < i && blo < j {
            queue.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            queue.push((i + size, ahi, j + size, bhi));
        }
    }

    total
}

/// Longest common run of `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Returns `(i, j, size)`. Among runs of equal length the one starting
/// earliest in `a`, then earliest in `b`, is chosen.
fn longest_match(
    a: &[char],
    b2j: &AHashMap<char, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);

    // Length of the run ending at (i - 1, j) for the previous row.
    let mut run_lengths: AHashMap<usize, usize> = AHashMap::new();

    for (i, c) in a.iter().enumerate().take(ahi).skip(alo) {
        let mut next_lengths: AHashMap<usize, usize> = AHashMap::new();

        if let Some(positions) = b2j.get(c) {
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }

                let k = j
                    .checked_sub(1)
                    .and_then(|prev| run_lengths.get(&prev))
                    .copied()
                    .unwrap_or(0)
                    + 1;
                next_lengths.insert(j, k);

                if k > best_size {
                    best_i = i + 1 - k;
                    best_j = j + 1 - k;
                    best_size = k;
                }
            }
        }

        run_lengths = next_lengths;
    }

    (best_i, best_j, best_size)
}
