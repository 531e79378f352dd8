//! CSV dictionary loader.
//!
//! The source table has a header row followed by data rows:
//! ```csv
//! 사투리,표준어,지역
//! 가가,이렇게,경상
//! 머라카노,뭐라고 하는거야,경상
//! ```
//! The file is stored in a legacy Korean code page, so bytes are decoded with
//! a configurable encoding before the CSV reader sees them.

use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use encoding_rs::{EUC_KR, Encoding};

use crate::config::DictionaryConfig;
use crate::dictionary::entry::DialectEntry;
use crate::dictionary::index::DialectIndex;
use crate::error::{Result, SaturiError};

/// Reads dictionary tables into a [`DialectIndex`].
///
/// Rows with fewer than two fields are skipped. Every field is trimmed; the
/// third field, when present, is the region tag.
#[derive(Debug, Clone)]
pub struct DictionaryLoader {
    /// Text encoding of the source bytes (default: EUC-KR / code page 949)
    encoding: &'static Encoding,
    /// CSV delimiter (default: ',')
    delimiter: u8,
}

impl Default for DictionaryLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DictionaryLoader {
    /// Create a loader for comma separated EUC-KR files.
    pub fn new() -> Self {
        DictionaryLoader {
            encoding: EUC_KR,
            delimiter: b',',
        }
    }

    /// Create a loader from the dictionary section of the configuration.
    pub fn from_config(config: &DictionaryConfig) -> Result<Self> {
        Self::new()
            .with_encoding_label(&config.encoding)
            .and_then(|loader| loader.with_delimiter(config.delimiter))
    }

    /// Set the source encoding.
    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Set the source encoding from a WHATWG label such as `"euc-kr"` or `"utf-8"`.
    pub fn with_encoding_label(self, label: &str) -> Result<Self> {
        let encoding = Encoding::for_label(label.as_bytes()).ok_or_else(|| {
            SaturiError::invalid_config(format!("unknown dictionary encoding: {label}"))
        })?;
        Ok(self.with_encoding(encoding))
    }

    /// Set a custom delimiter character. Only ASCII delimiters are accepted.
    pub fn with_delimiter(mut self, delimiter: char) -> Result<Self> {
        if !delimiter.is_ascii() {
            return Err(SaturiError::invalid_config(format!(
                "dictionary delimiter must be ASCII, got {delimiter:?}"
            )));
        }
        self.delimiter = delimiter as u8;
        Ok(self)
    }

    /// The configured source encoding.
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Load a dictionary file.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<DialectIndex> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| {
            SaturiError::data_format(format!("cannot read {}: {e}", path.display()))
        })?;

        let index = self.load_bytes(&bytes)?;
        log::info!(
            "Loaded {} dialect terms from {}",
            index.len(),
            path.display()
        );
        Ok(index)
    }

    /// Decode raw bytes with the configured encoding and parse them.
    pub fn load_bytes(&self, bytes: &[u8]) -> Result<DialectIndex> {
        let text = self
            .encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
            .ok_or_else(|| {
                SaturiError::data_format(format!(
                    "dictionary is not valid {}",
                    self.encoding.name()
                ))
            })?;

        self.parse_str(&text)
    }

    /// Parse already decoded CSV text.
    ///
    /// The first physical line is the header and is always discarded, even
    /// when it is blank. Blank lines after it are ignored.
    pub fn parse_str(&self, text: &str) -> Result<DialectIndex> {
        if text.is_empty() {
            return Err(SaturiError::schema("dictionary has no header row"));
        }
        let body = match text.find(['\r', '\n']) {
            Some(end) => {
                let rest = &text[end..];
                rest.strip_prefix("\r\n")
                    .or_else(|| rest.get(1..))
                    .unwrap_or("")
            }
            None => "",
        };

        let reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(body.as_bytes());

        let mut entries = Vec::new();
        for (row, record) in reader.into_records().enumerate() {
            let record = record.map_err(|e| {
                SaturiError::data_format(format!("failed to read CSV record: {e}"))
            })?;

            match DialectEntry::from_fields(record.iter()) {
                Some(entry) => entries.push(entry),
                None => log::debug!("Skipping row {} with fewer than two fields", row + 2),
            }
        }

        Ok(DialectIndex::from_entries(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_euc_kr(text: &str) -> NamedTempFile {
        let (bytes, _, had_errors) = EUC_KR.encode(text);
        assert!(!had_errors);
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&bytes).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_euc_kr_file() {
        let file = write_euc_kr("사투리,표준어,지역\n가가,이렇게,경상\n머라카노,뭐라고 하는거야,경상\n");
        let index = DictionaryLoader::new().load(file.path()).unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index.standard_of("가가"), Some("이렇게"));
        assert_eq!(index.standard_of("머라카노"), Some("뭐라고 하는거야"));
        assert_eq!(index.region_of("머라카노"), Some("경상"));
    }

    #[test]
    fn test_header_row_is_skipped() {
        let index = DictionaryLoader::new()
            .parse_str("dialect,standard,region\nabc,xyz,north")
            .unwrap();
        assert!(!index.contains("dialect"));
        assert!(index.contains("abc"));
    }

    #[test]
    fn test_short_rows_are_skipped() {
        let index = DictionaryLoader::new()
            .parse_str("d,s,r\n혼자\n가가,이렇게\n")
            .unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.region_of("가가"), None);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let index = DictionaryLoader::new()
            .parse_str("d,s,r\n  가가 ,  이렇게 , 경상  \n")
            .unwrap();
        assert_eq!(index.standard_of("가가"), Some("이렇게"));
        assert_eq!(index.region_of("가가"), Some("경상"));
    }

    #[test]
    fn test_duplicates_last_row_wins() {
        let index = DictionaryLoader::new()
            .parse_str("d,s,r\n정구지,부추,경상\n정구지,부추나물,충청\n")
            .unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.standard_of("정구지"), Some("부추나물"));
        assert_eq!(index.region_of("정구지"), Some("충청"));
    }

    #[test]
    fn test_quoted_fields() {
        let index = DictionaryLoader::new()
            .parse_str("d,s,r\n\"아이다, 마\",\"아니야, 그만\",경상\n")
            .unwrap();
        assert_eq!(index.standard_of("아이다, 마"), Some("아니야, 그만"));
    }

    #[test]
    fn test_header_only_is_empty_index() {
        let index = DictionaryLoader::new().parse_str("d,s,r\n").unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn test_empty_source_is_schema_error() {
        let result = DictionaryLoader::new().parse_str("");
        assert!(matches!(result, Err(SaturiError::Schema(_))));
    }

    #[test]
    fn test_missing_file_is_data_format_error() {
        let result = DictionaryLoader::new().load("/nonexistent/dialect_dict.csv");
        assert!(matches!(result, Err(SaturiError::DataFormat(_))));
    }

    #[test]
    fn test_undecodable_bytes_are_data_format_error() {
        // 0xFF is not a valid lead byte in EUC-KR.
        let result = DictionaryLoader::new().load_bytes(b"d,s\n\xff\xff,x\n");
        assert!(matches!(result, Err(SaturiError::DataFormat(_))));
    }

    #[test]
    fn test_utf8_and_custom_delimiter() {
        let loader = DictionaryLoader::new()
            .with_encoding_label("utf-8")
            .unwrap()
            .with_delimiter('\t')
            .unwrap();
        let index = loader
            .load_bytes("d\ts\tr\n가가\t이렇게\t경상\n".as_bytes())
            .unwrap();
        assert_eq!(index.standard_of("가가"), Some("이렇게"));
    }

    #[test]
    fn test_blank_first_line_is_the_header() {
        let index = DictionaryLoader::new()
            .parse_str("\n가가,이렇게,경상\n머라카노,뭐라고 하는거야,경상\n")
            .unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.standard_of("가가"), Some("이렇게"));

        let index = DictionaryLoader::new().parse_str("\n").unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn test_crlf_header_and_blank_lines() {
        let index = DictionaryLoader::new()
            .parse_str("d,s,r\r\n\r\n가가,이렇게,경상\r\n\r\n거시기,그것,전라\r\n")
            .unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.region_of("가가"), Some("경상"));
        assert_eq!(index.region_of("거시기"), Some("전라"));
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let result = DictionaryLoader::new().with_delimiter('、');
        assert!(matches!(result, Err(SaturiError::InvalidConfig(_))));
        assert!(DictionaryLoader::new().with_delimiter(';').is_ok());
    }

    #[test]
    fn test_unknown_encoding_label() {
        let result = DictionaryLoader::new().with_encoding_label("klingon-8");
        assert!(matches!(result, Err(SaturiError::InvalidConfig(_))));
    }
}
