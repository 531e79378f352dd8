//! Command implementations for the Saturi CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::pin::pin;
use std::sync::Arc;

use futures::stream::{self, StreamExt};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::SaturiConfig;
use crate::dictionary::{DialectIndex, DictionaryLoader};
use crate::error::Result;
use crate::matching::FuzzyMatcher;
use crate::normalize::Normalizer;
use crate::service::{TranslationRequest, TranslationService};
use crate::translator::{OpenAITranslator, Translator, UnavailableTranslator};

/// Execute a CLI command.
pub async fn execute_command(args: SaturiArgs) -> Result<()> {
    let config = args.load_config()?;

    match &args.command {
        Command::Translate(translate_args) => translate(translate_args, &config, &args).await,
        Command::Batch(batch_args) => batch(batch_args, &config, &args).await,
        Command::Lookup(lookup_args) => lookup(lookup_args, &config, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &config, &args),
    }
}

/// Load the dictionary named by the configuration.
pub fn load_index(config: &SaturiConfig) -> Result<Arc<DialectIndex>> {
    let loader = DictionaryLoader::from_config(&config.dictionary)?;
    loader.load(&config.dictionary.path).map(Arc::new)
}

/// Build the fallback translator from configuration and CLI options.
///
/// Without an API key, or with fallback disabled, sentences that need the
/// fallback fail instead of being answered from the dictionary alone.
pub fn build_translator(
    config: &SaturiConfig,
    fallback: &FallbackArgs,
) -> Result<Arc<dyn Translator>> {
    if !config.fallback.enabled {
        return Ok(Arc::new(UnavailableTranslator::new(
            "fallback translation is disabled",
        )));
    }

    let api_key = fallback
        .api_key
        .clone()
        .filter(|key| !key.trim().is_empty())
        .or_else(|| config.fallback.api_key_from_env());

    match api_key {
        Some(key) => Ok(Arc::new(OpenAITranslator::from_config(
            &config.fallback,
            key,
        )?)),
        None => {
            log::warn!(
                "No API key found in {}; fallback translation is unavailable",
                config.fallback.api_key_env
            );
            Ok(Arc::new(UnavailableTranslator::new(
                "no API key configured for fallback translation",
            )))
        }
    }
}

fn build_service(config: &SaturiConfig, fallback: &FallbackArgs) -> Result<TranslationService> {
    let index = load_index(config)?;
    let translator = build_translator(config, fallback)?;
    Ok(TranslationService::new(Normalizer::with_config(
        index, translator, config,
    )))
}

/// Normalize one sentence.
async fn translate(args: &TranslateArgs, config: &SaturiConfig, cli_args: &SaturiArgs) -> Result<()> {
    let service = build_service(config, &args.fallback)?;
    let response = service
        .handle(&TranslationRequest::new(args.sentence.as_str()))
        .await?;

    output_result("Translation", &response, cli_args)
}

/// Answer JSON requests line by line, in input order.
///
/// A line that is not valid UTF-8 gets its own 400 reply; only a failing
/// reader stops the batch.
async fn batch(args: &BatchArgs, config: &SaturiConfig, cli_args: &SaturiArgs) -> Result<()> {
    let service = build_service(config, &args.fallback)?;

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };
    let lines = reader
        .split(b'\n')
        .filter(|line| !matches!(line, Ok(bytes) if bytes.trim_ascii().is_empty()));

    let mut replies = pin!(
        stream::iter(lines)
            .map(|line| {
                let service = service.clone();
                async move {
                    match line {
                        Ok(bytes) => Ok(service.handle_bytes(&bytes).await),
                        Err(e) => Err(e),
                    }
                }
            })
            .buffered(args.concurrency.max(1))
    );

    let (mut answered, mut failed) = (0usize, 0usize);
    while let Some(reply) = replies.next().await {
        let reply = reply?;
        answered += 1;
        if !reply.is_success() {
            failed += 1;
        }
        println!("{}", serde_json::to_string(&reply)?);
    }

    if cli_args.verbosity() > 1 {
        eprintln!("Answered {answered} requests ({failed} failed)");
    }
    log::info!("Batch finished: {answered} requests, {failed} failed");
    Ok(())
}

/// Show the closest dictionary entries for a word.
fn lookup(args: &LookupArgs, config: &SaturiConfig, cli_args: &SaturiArgs) -> Result<()> {
    let index = load_index(config)?;
    let matcher = FuzzyMatcher::from_config(&config.matcher);

    let candidates = matcher
        .candidates(&args.word, &index, args.limit)
        .into_iter()
        .map(|found| CandidateInfo {
            dialect: found.dialect().to_string(),
            standard: found.standard().to_string(),
            region: found.entry.region.clone(),
            score: found.score,
        })
        .collect();

    output_result(
        "Lookup",
        &LookupResult {
            word: args.word.clone(),
            cutoff: matcher.cutoff(),
            candidates,
        },
        cli_args,
    )
}

/// Show dictionary statistics.
fn show_stats(args: &StatsArgs, config: &SaturiConfig, cli_args: &SaturiArgs) -> Result<()> {
    let index = load_index(config)?;

    let regions = args.regions.then(|| {
        index
            .region_counts()
            .into_iter()
            .map(|(region, entries)| RegionCount { region, entries })
            .collect()
    });

    output_result(
        "Dictionary statistics",
        &DictionaryStats {
            path: config.dictionary.path.to_string_lossy().to_string(),
            entries: index.len(),
            regions,
        },
        cli_args,
    )
}
