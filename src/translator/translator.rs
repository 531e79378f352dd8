//! Translator trait for the fallback path.

use async_trait::async_trait;

use crate::error::Result;

/// Turns a whole dialect sentence into a standard-register sentence.
///
/// Implementations receive the original, unmodified sentence and return the
/// standardized sentence as plain text. Failures should be reported as
/// [`crate::error::SaturiError::FallbackUnavailable`]; the caller bounds every
/// call with a timeout.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use saturi::error::Result;
/// use saturi::translator::Translator;
///
/// struct Echo;
///
/// #[async_trait]
/// impl Translator for Echo {
///     async fn translate(&self, sentence: &str) -> Result<String> {
///         Ok(sentence.to_string())
///     }
///
///     fn name(&self) -> &str {
///         "echo"
///     }
/// }
/// ```
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate a sentence.
    async fn translate(&self, sentence: &str) -> Result<String>;

    /// Get the name/identifier of this translator.
    fn name(&self) -> &str;
}
