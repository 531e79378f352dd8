//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SaturiArgs};
use crate::error::Result;
use crate::normalize::engine::TranslationResponse;

/// A single lookup candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateInfo {
    pub dialect: String,
    pub standard: String,
    pub region: Option<String>,
    pub score: f64,
}

/// Result structure for word lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupResult {
    pub word: String,
    pub cutoff: f64,
    pub candidates: Vec<CandidateInfo>,
}

/// Entry count of one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionCount {
    pub region: Option<String>,
    pub entries: usize,
}

/// Dictionary statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryStats {
    pub path: String,
    pub entries: usize,
    pub regions: Option<Vec<RegionCount>>,
}

/// Types that know how to print themselves for humans.
pub trait HumanOutput {
    /// Render as human-readable lines.
    fn human_lines(&self) -> Vec<String>;
}

impl HumanOutput for TranslationResponse {
    fn human_lines(&self) -> Vec<String> {
        vec![
            format!("original:  {}", self.original),
            format!("converted: {}", self.converted),
            format!("region:    {}", self.region),
        ]
    }
}

impl HumanOutput for LookupResult {
    fn human_lines(&self) -> Vec<String> {
        if self.candidates.is_empty() {
            return vec![format!(
                "No dialect term matches '{}' at cutoff {:.2}",
                self.word, self.cutoff
            )];
        }

        let mut lines = vec![
            format!("Candidates for '{}':", self.word),
            "═══════════════".to_string(),
        ];
        for (rank, candidate) in self.candidates.iter().enumerate() {
            lines.push(format!(
                "{}. {} → {} [{}] (score: {:.3})",
                rank + 1,
                candidate.dialect,
                candidate.standard,
                candidate.region.as_deref().unwrap_or("-"),
                candidate.score
            ));
        }
        lines
    }
}

impl HumanOutput for DictionaryStats {
    fn human_lines(&self) -> Vec<String> {
        let mut lines = vec![
            "Dictionary Statistics:".to_string(),
            "══════════════════════".to_string(),
            format!("Path: {}", self.path),
            format!("Entries: {}", self.entries),
        ];

        if let Some(regions) = &self.regions {
            lines.push(String::new());
            lines.push("Regions:".to_string());
            for count in regions {
                lines.push(format!(
                    "  {}: {}",
                    count.region.as_deref().unwrap_or("(none)"),
                    count.entries
                ));
            }
        }
        lines
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &SaturiArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            for line in result.human_lines() {
                println!("{line}");
            }
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
pub fn output_json<T: Serialize>(result: &T, args: &SaturiArgs) -> Result<()> {
    println!("{}", format_json(result, args.pretty)?);
    Ok(())
}

fn format_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_human_lines() {
        let response = TranslationResponse {
            original: "가가 머라카노".to_string(),
            converted: "이렇게 뭐라고 하는거야".to_string(),
            region: "경상".to_string(),
        };
        let lines = response.human_lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].ends_with("이렇게 뭐라고 하는거야"));
        assert!(lines[2].ends_with("경상"));
    }

    #[test]
    fn test_lookup_human_lines() {
        let empty = LookupResult {
            word: "학교".to_string(),
            cutoff: 0.6,
            candidates: Vec::new(),
        };
        assert_eq!(empty.human_lines().len(), 1);

        let found = LookupResult {
            word: "머라카나".to_string(),
            cutoff: 0.6,
            candidates: vec![CandidateInfo {
                dialect: "머라카노".to_string(),
                standard: "뭐라고 하는거야".to_string(),
                region: None,
                score: 0.75,
            }],
        };
        let lines = found.human_lines();
        assert!(lines[2].contains("[-]"));
        assert!(lines[2].contains("0.750"));
    }

    #[test]
    fn test_format_json() {
        let stats = DictionaryStats {
            path: "dialect_dict.csv".to_string(),
            entries: 2,
            regions: None,
        };
        let json = format_json(&stats, false).unwrap();
        assert_eq!(
            json,
            r#"{"path":"dialect_dict.csv","entries":2,"regions":null}"#
        );
        assert!(format_json(&stats, true).unwrap().contains('\n'));
    }
}
