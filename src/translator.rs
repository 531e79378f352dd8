//! External sentence translators used as the normalization fallback.
//!
//! The engine only depends on the [`Translator`] trait, so the HTTP-backed
//! [`OpenAITranslator`] can be replaced by a stub in tests or by
//! [`UnavailableTranslator`] when no service is configured.

pub mod openai;
pub mod translator;
pub mod unavailable;

pub use openai::OpenAITranslator;
pub use translator::Translator;
pub use unavailable::UnavailableTranslator;
