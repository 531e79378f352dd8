//! Command line argument parsing for the Saturi CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::SaturiConfig;
use crate::error::Result;
use crate::matching::matcher::SimilarityMetric;

/// Saturi - normalize Korean dialect sentences into the standard register
#[derive(Parser, Debug, Clone)]
#[command(name = "saturi")]
#[command(about = "Normalize dialect sentences into the standard register")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SaturiArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "SATURI_CONFIG")]
    pub config: Option<PathBuf>,

    /// Dictionary file (CSV: dialect, standard, region)
    #[arg(short, long, value_name = "DICTIONARY_FILE", env = "SATURI_DICTIONARY")]
    pub dictionary: Option<PathBuf>,

    /// Encoding label of the dictionary file (e.g. euc-kr, utf-8)
    #[arg(long)]
    pub encoding: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SaturiArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Load the configuration file (if any) and apply global overrides.
    pub fn load_config(&self) -> Result<SaturiConfig> {
        let mut config = match &self.config {
            Some(path) => SaturiConfig::load_from_file(path)?,
            None => SaturiConfig::default(),
        };

        if let Some(path) = &self.dictionary {
            config.dictionary.path = path.clone();
        }
        if let Some(encoding) = &self.encoding {
            config.dictionary.encoding = encoding.clone();
        }

        if let Some(matching) = self.command.matching_args() {
            matching.apply(&mut config);
        }
        if let Some(fallback) = self.command.fallback_args() {
            fallback.apply(&mut config);
        }

        config.validate()?;
        Ok(config)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Normalize a single sentence
    Translate(TranslateArgs),

    /// Answer JSON requests read line by line
    Batch(BatchArgs),

    /// Show the closest dictionary entries for a word
    Lookup(LookupArgs),

    /// Show dictionary statistics
    Stats(StatsArgs),
}

impl Command {
    /// Matching options of the command, if it has any.
    pub fn matching_args(&self) -> Option<&MatchingArgs> {
        match self {
            Command::Translate(args) => Some(&args.matching),
            Command::Batch(args) => Some(&args.matching),
            Command::Lookup(args) => Some(&args.matching),
            Command::Stats(_) => None,
        }
    }

    /// Fallback options of the command, if it has any.
    pub fn fallback_args(&self) -> Option<&FallbackArgs> {
        match self {
            Command::Translate(args) => Some(&args.fallback),
            Command::Batch(args) => Some(&args.fallback),
            Command::Lookup(_) | Command::Stats(_) => None,
        }
    }
}

/// Matching options shared by several commands
#[derive(Args, Debug, Clone, Default)]
pub struct MatchingArgs {
    /// Minimum similarity for a word to match a dialect term
    #[arg(long)]
    pub cutoff: Option<f64>,

    /// Similarity metric
    #[arg(long)]
    pub metric: Option<SimilarityMetric>,
}

impl MatchingArgs {
    fn apply(&self, config: &mut SaturiConfig) {
        if let Some(cutoff) = self.cutoff {
            config.matcher.cutoff = cutoff;
        }
        if let Some(metric) = self.metric {
            config.matcher.metric = metric;
        }
    }
}

/// Fallback translator options
#[derive(Args, Debug, Clone, Default)]
pub struct FallbackArgs {
    /// Never call the external translator; unresolved sentences fail
    #[arg(long)]
    pub no_fallback: bool,

    /// API key for the external translator
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Chat model used for fallback translation
    #[arg(long)]
    pub model: Option<String>,

    /// Timeout for one fallback call, in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl FallbackArgs {
    fn apply(&self, config: &mut SaturiConfig) {
        if self.no_fallback {
            config.fallback.enabled = false;
        }
        if let Some(model) = &self.model {
            config.fallback.model = model.clone();
        }
        if let Some(timeout) = self.timeout {
            config.fallback.timeout_secs = timeout;
        }
    }
}

/// Arguments for translating one sentence
#[derive(Parser, Debug, Clone)]
pub struct TranslateArgs {
    /// Sentence to normalize
    #[arg(value_name = "SENTENCE")]
    pub sentence: String,

    #[command(flatten)]
    pub matching: MatchingArgs,

    #[command(flatten)]
    pub fallback: FallbackArgs,
}

/// Arguments for batch translation
#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    /// File with one JSON request per line (default: stdin)
    #[arg(value_name = "INPUT_FILE")]
    pub input: Option<PathBuf>,

    /// Maximum number of requests in flight
    #[arg(long, default_value = "4")]
    pub concurrency: usize,

    #[command(flatten)]
    pub matching: MatchingArgs,

    #[command(flatten)]
    pub fallback: FallbackArgs,
}

/// Arguments for looking up a word
#[derive(Parser, Debug, Clone)]
pub struct LookupArgs {
    /// Word to look up
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Maximum number of candidates to show
    #[arg(short, long, default_value = "5")]
    pub limit: usize,

    #[command(flatten)]
    pub matching: MatchingArgs,
}

/// Arguments for dictionary statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Include per-region entry counts
    #[arg(short, long)]
    pub regions: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
