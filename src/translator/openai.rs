//! OpenAI chat-completions translator.
//!
//! Sends the sentence with a fixed instruction asking for the standard
//! register and returns the first completion as plain text.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::FallbackConfig;
use crate::error::{Result, SaturiError};
use crate::translator::translator::Translator;

/// System message sent with every request.
pub const SYSTEM_PROMPT: &str = "당신은 사투리 번역기입니다.";

/// Build the user message for a dialect sentence.
pub fn build_prompt(sentence: &str) -> String {
    format!("다음 문장은 사투리야. 이 문장을 표준어로 바꿔줘:\n\"{sentence}\"")
}

/// Request structure for the chat completions API.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    /// Model identifier.
    model: &'a str,
    /// Conversation, system message first.
    messages: Vec<ChatMessage>,
    /// Sampling temperature.
    temperature: f32,
}

/// A single chat message.
#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    #[serde(default)]
    content: Option<String>,
}

/// Response structure from the chat completions API.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Translator backed by an OpenAI-compatible chat completions endpoint.
///
/// # Examples
///
/// ```no_run
/// use saturi::translator::{OpenAITranslator, Translator};
///
/// # async fn example() -> saturi::error::Result<()> {
/// let translator = OpenAITranslator::new(
///     std::env::var("OPENAI_API_KEY").unwrap(),
///     "gpt-4o".to_string(),
/// )?;
///
/// let standard = translator.translate("니 어데 가노").await?;
/// println!("{standard}");
/// # Ok(())
/// # }
/// ```
pub struct OpenAITranslator {
    /// HTTP client for making API requests.
    client: Client,
    /// API key for authentication.
    api_key: String,
    /// Chat model name (e.g., "gpt-4o").
    model: String,
    /// Sampling temperature.
    temperature: f32,
    /// Chat completions URL.
    endpoint: String,
}

impl std::fmt::Debug for OpenAITranslator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAITranslator")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl OpenAITranslator {
    /// Create a translator with default endpoint and temperature.
    pub fn new(api_key: String, model: String) -> Result<Self> {
        let defaults = FallbackConfig {
            model,
            ..FallbackConfig::default()
        };
        Self::from_config(&defaults, api_key)
    }

    /// Create a translator from the fallback configuration.
    pub fn from_config(config: &FallbackConfig, api_key: String) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(SaturiError::invalid_config("OpenAI API key is empty"));
        }
        if config.model.trim().is_empty() {
            return Err(SaturiError::invalid_config("fallback.model is empty"));
        }

        let client = Client::builder()
            .timeout(config.timeout().saturating_add(Duration::from_secs(1)))
            .build()
            .map_err(|e| SaturiError::other(format!("failed to build HTTP client: {e}")))?;

        Ok(OpenAITranslator {
            client,
            api_key,
            model: config.model.clone(),
            temperature: config.temperature,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Set a custom chat completions URL.
    pub fn with_endpoint<S: Into<String>>(mut self, endpoint: S) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    fn request_for<'a>(&'a self, sentence: &str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: Some(SYSTEM_PROMPT.to_string()),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: Some(build_prompt(sentence)),
                },
            ],
            temperature: self.temperature,
        }
    }
}

/// Extract the first completion text from a response body.
fn parse_completion(response_text: &str) -> Result<String> {
    let response: ChatResponse = serde_json::from_str(response_text).map_err(|e| {
        SaturiError::fallback_service(format!(
            "Failed to parse OpenAI response: {e}. Response text: {response_text}"
        ))
    })?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| SaturiError::fallback_service("No completion in response"))
}

#[async_trait]
impl Translator for OpenAITranslator {
    async fn translate(&self, sentence: &str) -> Result<String> {
        let request = self.request_for(sentence);

        let http_response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| SaturiError::fallback_service(format!("OpenAI API request failed: {e}")))?;

        let status = http_response.status();
        let response_text = http_response.text().await.map_err(|e| {
            SaturiError::fallback_service(format!("Failed to read response text: {e}"))
        })?;

        if !status.is_success() {
            return Err(SaturiError::fallback_service(format!(
                "OpenAI API error (status {status}): {response_text}"
            )));
        }

        parse_completion(&response_text)
    }

    fn name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FallbackFailure;

    #[test]
    fn test_prompt_contains_original_sentence() {
        let prompt = build_prompt("니 어데 가노");
        assert!(prompt.starts_with("다음 문장은 사투리야."));
        assert!(prompt.ends_with("\"니 어데 가노\""));
    }

    #[test]
    fn test_request_shape() {
        let translator = OpenAITranslator::new("sk-test".to_string(), "gpt-4o".to_string()).unwrap();
        let value = serde_json::to_value(translator.request_for("가가 머라카노")).unwrap();

        assert_eq!(value["model"], "gpt-4o");
        assert_eq!(value["temperature"], 0.5);
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][0]["content"], SYSTEM_PROMPT);
        assert_eq!(value["messages"][1]["role"], "user");
        assert!(
            value["messages"][1]["content"]
                .as_str()
                .unwrap()
                .contains("가가 머라카노")
        );
    }

    #[test]
    fn test_parse_completion() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"이렇게 뭐라고 하는거야"}}]}"#;
        assert_eq!(parse_completion(body).unwrap(), "이렇게 뭐라고 하는거야");
    }

    #[test]
    fn test_parse_completion_errors() {
        assert!(matches!(
            parse_completion(r#"{"choices":[]}"#),
            Err(SaturiError::FallbackUnavailable(FallbackFailure::Service(_)))
        ));
        assert!(matches!(
            parse_completion(r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#),
            Err(SaturiError::FallbackUnavailable(_))
        ));
        assert!(parse_completion("not json").is_err());
    }

    #[test]
    fn test_rejects_empty_key() {
        let result = OpenAITranslator::new("  ".to_string(), "gpt-4o".to_string());
        assert!(matches!(result, Err(SaturiError::InvalidConfig(_))));
    }

    #[test]
    fn test_huge_timeout_does_not_overflow() {
        let config = FallbackConfig {
            timeout_secs: u64::MAX,
            ..FallbackConfig::default()
        };
        let translator = OpenAITranslator::from_config(&config, "sk-test".to_string()).unwrap();
        assert_eq!(translator.name(), "gpt-4o");
    }

    #[test]
    fn test_debug_redacts_key() {
        let translator = OpenAITranslator::new("sk-secret".to_string(), "gpt-4o".to_string()).unwrap();
        let debug = format!("{translator:?}");
        assert!(!debug.contains("sk-secret"));
        assert_eq!(translator.name(), "gpt-4o");
    }
}
