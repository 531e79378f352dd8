//! A single dictionary row.

use serde::{Deserialize, Serialize};

/// One dialect term with its standard equivalent and optional region tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialectEntry {
    /// The dialect word or phrase. Unique within an index.
    pub dialect: String,
    /// The standard-register equivalent.
    pub standard: String,
    /// Region the dialect term is associated with.
    pub region: Option<String>,
}

impl DialectEntry {
    /// Create a new entry. An empty region is stored as absent.
    pub fn new<D, S>(dialect: D, standard: S, region: Option<String>) -> Self
    where
        D: Into<String>,
        S: Into<String>,
    {
        DialectEntry {
            dialect: dialect.into(),
            standard: standard.into(),
            region: region.filter(|r| !r.is_empty()),
        }
    }

    /// Build an entry from raw table fields, trimming each of them.
    ///
    /// Returns `None` for rows with fewer than two fields.
    pub fn from_fields<'a, I>(fields: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut fields = fields.into_iter().map(str::trim);
        let dialect = fields.next()?;
        let standard = fields.next()?;
        let region = fields.next().map(str::to_string);

        Some(DialectEntry::new(dialect, standard, region))
    }

    /// The region tag, if any.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fields_trims() {
        let entry = DialectEntry::from_fields(["  가가 ", " 이렇게", " 경상 "]).unwrap();
        assert_eq!(entry.dialect, "가가");
        assert_eq!(entry.standard, "이렇게");
        assert_eq!(entry.region(), Some("경상"));
    }

    #[test]
    fn test_from_fields_without_region() {
        let entry = DialectEntry::from_fields(["머꼬", "뭐야"]).unwrap();
        assert_eq!(entry.region(), None);

        let entry = DialectEntry::from_fields(["머꼬", "뭐야", "  "]).unwrap();
        assert_eq!(entry.region(), None);
    }

    #[test]
    fn test_from_fields_too_short() {
        assert!(DialectEntry::from_fields(["외톨이"]).is_none());
        assert!(DialectEntry::from_fields(Vec::<&str>::new()).is_none());
    }
}
