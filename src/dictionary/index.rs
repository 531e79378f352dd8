//! Immutable lookup structures over dictionary entries.

use ahash::AHashMap;

use crate::dictionary::entry::DialectEntry;

/// Lookup tables keyed by dialect term.
///
/// The index answers both "what is the standard term" and "which region does
/// this term belong to" from a single entry list, so the two views always
/// share the same key set. Iteration follows the order in which each dialect
/// term was first inserted; a later duplicate replaces the earlier values but
/// keeps that position.
#[derive(Debug, Clone, Default)]
pub struct DialectIndex {
    /// Entries in first-insertion order.
    entries: Vec<DialectEntry>,
    /// Dialect term to position in `entries`.
    positions: AHashMap<String, usize>,
}

impl DialectIndex {
    /// Build an index from entries. Later duplicates win.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = DialectEntry>,
    {
        let mut index = DialectIndex::default();
        for entry in entries {
            index.insert(entry);
        }
        index
    }

    fn insert(&mut self, entry: DialectEntry) {
        match self.positions.get(&entry.dialect) {
            Some(&pos) => {
                log::debug!(
                    "Duplicate dialect term '{}', replacing earlier row",
                    entry.dialect
                );
                self.entries[pos] = entry;
            }
            None => {
                self.positions
                    .insert(entry.dialect.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Look up the full entry for a dialect term.
    pub fn get(&self, dialect: &str) -> Option<&DialectEntry> {
        self.positions.get(dialect).map(|&pos| &self.entries[pos])
    }

    /// Standard term for a dialect term.
    pub fn standard_of(&self, dialect: &str) -> Option<&str> {
        self.get(dialect).map(|entry| entry.standard.as_str())
    }

    /// Region tag for a dialect term. Absent and empty tags both yield `None`.
    pub fn region_of(&self, dialect: &str) -> Option<&str> {
        self.get(dialect).and_then(DialectEntry::region)
    }

    /// Check whether a dialect term is known.
    pub fn contains(&self, dialect: &str) -> bool {
        self.positions.contains_key(dialect)
    }

    /// All entries in iteration order.
    pub fn entries(&self) -> &[DialectEntry] {
        &self.entries
    }

    /// Dialect terms in iteration order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.dialect.as_str())
    }

    /// Number of distinct dialect terms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries per region, most common first.
    ///
    /// Entries without a region are counted under `None`. Regions with equal
    /// counts keep the order in which they first appear.
    pub fn region_counts(&self) -> Vec<(Option<String>, usize)> {
        let mut counts: Vec<(Option<String>, usize)> = Vec::new();
        let mut slots: AHashMap<Option<&str>, usize> = AHashMap::new();

        for entry in &self.entries {
            let region = entry.region();
            match slots.get(&region) {
                Some(&slot) => counts[slot].1 += 1,
                None => {
                    slots.insert(region, counts.len());
                    counts.push((region.map(str::to_string), 1));
                }
            }
        }

        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }
}

impl FromIterator<DialectEntry> for DialectIndex {
    fn from_iter<I: IntoIterator<Item = DialectEntry>>(iter: I) -> Self {
        DialectIndex::from_entries(iter)
    }
}
