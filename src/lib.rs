//! # Saturi
//!
//! Dictionary-driven normalization of Korean dialect sentences into the
//! standard register, with region inference and a language-model fallback.
//!
//! ## Features
//!
//! - CSV dialect dictionaries in legacy code pages
//! - Approximate per-word matching with a similarity cutoff
//! - Region inference from the matched vocabulary
//! - Pluggable external translator for sentences the dictionary cannot cover
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use saturi::dictionary::DictionaryLoader;
//! use saturi::normalize::Normalizer;
//! use saturi::translator::UnavailableTranslator;
//!
//! # async fn example() -> saturi::error::Result<()> {
//! let index = DictionaryLoader::new()
//!     .parse_str("dialect,standard,region\n가가,이렇게,경상\n머라카노,뭐라고 하는거야,경상\n")?;
//! let normalizer = Normalizer::new(Arc::new(index), Arc::new(UnavailableTranslator::default()));
//!
//! let response = normalizer.normalize("가가 머라카노").await?;
//! assert_eq!(response.converted, "이렇게 뭐라고 하는거야");
//! assert_eq!(response.region, "경상");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod matching;
pub mod normalize;
pub mod service;
pub mod translator;

pub mod prelude {
    pub use crate::config::SaturiConfig;
    pub use crate::dictionary::{DialectEntry, DialectIndex, DictionaryLoader};
    pub use crate::error::{Result, SaturiError};
    pub use crate::matching::{FuzzyMatcher, WordMatcher};
    pub use crate::normalize::{Normalizer, TranslationResponse};
    pub use crate::service::{TranslationRequest, TranslationService};
    pub use crate::translator::Translator;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
