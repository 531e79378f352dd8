//! Translator used when no external service is configured.

use async_trait::async_trait;

use crate::error::{Result, SaturiError};
use crate::translator::translator::Translator;

/// Always fails, so sentences that need a fallback are reported as errors
/// instead of being answered with a partial conversion.
#[derive(Debug, Clone)]
pub struct UnavailableTranslator {
    reason: String,
}

impl UnavailableTranslator {
    /// Create a translator that fails with the given reason.
    pub fn new<S: Into<String>>(reason: S) -> Self {
        UnavailableTranslator {
            reason: reason.into(),
        }
    }
}

impl Default for UnavailableTranslator {
    fn default() -> Self {
        Self::new("no fallback translator configured")
    }
}

#[async_trait]
impl Translator for UnavailableTranslator {
    async fn translate(&self, _sentence: &str) -> Result<String> {
        Err(SaturiError::fallback_service(self.reason.clone()))
    }

    fn name(&self) -> &str {
        "unavailable"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FallbackFailure;

    #[tokio::test]
    async fn test_always_fails() {
        let translator = UnavailableTranslator::new("fallback disabled");
        let err = translator.translate("머라카노").await.unwrap_err();

        match err {
            SaturiError::FallbackUnavailable(FallbackFailure::Service(msg)) => {
                assert_eq!(msg, "fallback disabled")
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(translator.name(), "unavailable");
    }
}
