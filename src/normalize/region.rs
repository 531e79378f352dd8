//! Region inference from matched dialect terms.

use ahash::AHashMap;

use crate::dictionary::index::DialectIndex;

/// Region reported when no matched term carries a region tag.
pub const UNKNOWN_REGION: &str = "unknown";

/// Most frequent region among the matched dialect terms.
///
/// Terms missing from the index or without a region tag are ignored. Ties go
/// to the region seen first while scanning `matched` from left to right.
/// Returns [`UNKNOWN_REGION`] when nothing is left to count.
pub fn infer_region<S: AsRef<str>>(matched: &[S], index: &DialectIndex) -> String {
    let mut tally: Vec<(&str, usize)> = Vec::new();
    let mut slots: AHashMap<&str, usize> = AHashMap::new();

    for region in matched
        .iter()
        .filter_map(|term| index.region_of(term.as_ref()))
    {
        match slots.get(region) {
            Some(&slot) => tally[slot].1 += 1,
            None => {
                slots.insert(region, tally.len());
                tally.push((region, 1));
            }
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (region, count) in tally {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((region, count));
        }
    }

    best.map_or_else(|| UNKNOWN_REGION.to_string(), |(region, _)| region.to_string())
}
