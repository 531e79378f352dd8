//! JSON request handling on top of the [`Normalizer`].
//!
//! A request is an object with a string field `sentence`; a successful reply
//! is `{"original", "converted", "region"}` and a failed one is
//! `{"error": message}` with the status from [`SaturiError::status_code`].
//! Routing, CORS and the HTTP server itself belong to the embedding
//! application.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::{Result, SaturiError};
use crate::normalize::engine::{Normalizer, TranslationResponse};

const MISSING_SENTENCE: &str = "missing required field: sentence";

/// A validated translation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// The dialect sentence to normalize.
    pub sentence: String,
}

impl TranslationRequest {
    /// Create a request for a sentence.
    pub fn new<S: Into<String>>(sentence: S) -> Self {
        TranslationRequest {
            sentence: sentence.into(),
        }
    }

    /// Parse and validate a JSON request body.
    pub fn from_json(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| SaturiError::client_input(format!("request body is not valid JSON: {e}")))?;
        Self::from_value(&value)
    }

    /// Validate an already parsed JSON value.
    pub fn from_value(value: &Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| SaturiError::client_input("request body must be a JSON object"))?;

        match object.get("sentence") {
            None | Some(Value::Null) => Err(SaturiError::client_input(MISSING_SENTENCE)),
            Some(Value::String(sentence)) => Ok(TranslationRequest::new(sentence.as_str())),
            Some(_) => Err(SaturiError::client_input("field 'sentence' must be a string")),
        }
    }
}

/// Error body returned for failed requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human readable message.
    pub error: String,
}

/// Status and JSON body for one handled request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceReply {
    /// HTTP-style status code.
    pub status: u16,
    /// Response body.
    pub body: Value,
}

impl ServiceReply {
    fn ok(response: &TranslationResponse) -> Result<Self> {
        Ok(ServiceReply {
            status: 200,
            body: serde_json::to_value(response)?,
        })
    }

    fn error(err: &SaturiError) -> Self {
        ServiceReply {
            status: err.status_code(),
            body: json!({ "error": err.to_string() }),
        }
    }

    /// Whether the request succeeded.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Handles translation requests; cheap to clone and share across tasks.
#[derive(Debug, Clone)]
pub struct TranslationService {
    normalizer: Normalizer,
}

impl TranslationService {
    /// Create a service around a normalizer.
    pub fn new(normalizer: Normalizer) -> Self {
        TranslationService { normalizer }
    }

    /// The underlying normalizer.
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Handle a validated request.
    pub async fn handle(&self, request: &TranslationRequest) -> Result<TranslationResponse> {
        self.normalizer.normalize(&request.sentence).await
    }

    /// Handle a raw JSON body and shape the reply.
    pub async fn handle_json(&self, body: &str) -> ServiceReply {
        let outcome = match TranslationRequest::from_json(body) {
            Ok(request) => self.handle(&request).await,
            Err(err) => Err(err),
        };
        Self::reply(outcome)
    }

    /// Handle a raw request body that may not be valid UTF-8.
    pub async fn handle_bytes(&self, body: &[u8]) -> ServiceReply {
        match std::str::from_utf8(body) {
            Ok(text) => self.handle_json(text).await,
            Err(e) => Self::reply(Err(SaturiError::client_input(format!(
                "request body is not valid UTF-8: {e}"
            )))),
        }
    }

    /// Handle a parsed JSON value and shape the reply.
    pub async fn handle_value(&self, value: &Value) -> ServiceReply {
        let outcome = match TranslationRequest::from_value(value) {
            Ok(request) => self.handle(&request).await,
            Err(err) => Err(err),
        };
        Self::reply(outcome)
    }

    fn reply(outcome: Result<TranslationResponse>) -> ServiceReply {
        match outcome.and_then(|response| ServiceReply::ok(&response)) {
            Ok(reply) => reply,
            Err(err) => {
                if err.is_client_error() {
                    log::debug!("Rejected request: {err}");
                } else {
                    log::error!("Request failed: {err}");
                }
                ServiceReply::error(&err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_validation() {
        let request = TranslationRequest::from_json(r#"{"sentence": "가가 머라카노"}"#).unwrap();
        assert_eq!(request.sentence, "가가 머라카노");

        let request = TranslationRequest::from_json(r#"{"sentence": ""}"#).unwrap();
        assert_eq!(request.sentence, "");
    }

    #[test]
    fn test_missing_sentence_is_client_error() {
        for body in [r#"{}"#, r#"{"sentence": null}"#, r#"{"text": "가가"}"#] {
            let err = TranslationRequest::from_json(body).unwrap_err();
            assert_eq!(err.status_code(), 400);
            assert!(err.to_string().contains(MISSING_SENTENCE));
        }
    }

    #[test]
    fn test_malformed_bodies_are_client_errors() {
        for body in ["", "not json", "[1, 2]", r#""sentence""#, r#"{"sentence": 3}"#] {
            let err = TranslationRequest::from_json(body).unwrap_err();
            assert!(err.is_client_error(), "body {body:?}");
        }
    }
}
