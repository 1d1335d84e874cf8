//! Request handling for the evaluate, validate, and errors operations.
//!
//! Transport-agnostic: a front end hands over a decoded request and gets a
//! response value back, never an error. Grammar failures are recorded into
//! the failure store under the observing endpoint; requests without a usable
//! expression are rejected before the grammar runs and are not recorded.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use wordcalc_core::{evaluate, validate, Evaluation};

use crate::store::{Endpoint, FailureRecord, FailureStore};

/// Collaborator-level request failures, distinct from grammar reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// Request payload lacks a usable expression field.
    #[error("Invalid JSON data")]
    MalformedRequest,
}

/// Decoded request body for evaluate and validate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionRequest {
    #[serde(default)]
    pub expression: Option<String>,
}

impl QuestionRequest {
    /// Wrap inline question text.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            expression: Some(text.into()),
        }
    }

    /// The expression to hand to the grammar, or the malformed-request
    /// rejection when the field is absent or empty.
    fn expression(&self) -> Result<&str, RequestError> {
        match self.expression.as_deref() {
            Some(expression) if !expression.is_empty() => Ok(expression),
            _ => Err(RequestError::MalformedRequest),
        }
    }
}

/// Response body of the evaluate operation.
///
/// `result` carries the formatted value on success and the failure wire
/// string otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluateResponse {
    pub result: String,
}

/// Response body of the validate operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Question service: owns the failure store and applies the request
/// contract for all three operations.
#[derive(Debug, Default)]
pub struct QuestionService {
    store: Arc<FailureStore>,
}

impl QuestionService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a service around an existing store.
    pub fn with_store(store: Arc<FailureStore>) -> Self {
        Self { store }
    }

    /// The store this service records into.
    pub fn store(&self) -> &FailureStore {
        &self.store
    }

    /// Evaluate operation: formatted value on success, failure wire string
    /// otherwise.
    pub fn evaluate(&self, request: &QuestionRequest) -> EvaluateResponse {
        let expression = match request.expression() {
            Ok(expression) => expression,
            Err(error) => {
                log::warn!("rejected malformed evaluate request");
                return EvaluateResponse {
                    result: error.to_string(),
                };
            }
        };

        log::debug!("evaluating {expression:?}");
        match evaluate(expression) {
            Evaluation {
                value,
                reason: None,
            } => EvaluateResponse {
                result: format_value(value),
            },
            Evaluation {
                reason: Some(reason),
                ..
            } => {
                self.store.record(expression, Endpoint::Evaluate, reason);
                log::info!("evaluation failed: {reason} for {expression:?}");
                EvaluateResponse {
                    result: reason.as_str().to_string(),
                }
            }
        }
    }

    /// Validate operation: grammar check without computing a value.
    pub fn validate(&self, request: &QuestionRequest) -> ValidateResponse {
        let expression = match request.expression() {
            Ok(expression) => expression,
            Err(error) => {
                log::warn!("rejected malformed validate request");
                return ValidateResponse {
                    valid: false,
                    reason: Some(error.to_string()),
                };
            }
        };

        log::debug!("validating {expression:?}");
        match validate(expression).reason {
            None => ValidateResponse {
                valid: true,
                reason: None,
            },
            Some(reason) => {
                self.store.record(expression, Endpoint::Validate, reason);
                log::info!("validation failed: {reason} for {expression:?}");
                ValidateResponse {
                    valid: false,
                    reason: Some(reason.as_str().to_string()),
                }
            }
        }
    }

    /// Errors query: snapshot of every failure recorded so far.
    pub fn errors(&self) -> Vec<FailureRecord> {
        self.store.records()
    }
}

/// Shortest round-trip decimal formatting: no exponent, no forced `.0` on
/// integral values.
fn format_value(value: f64) -> String {
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_formats_integral_results_without_decimal() {
        let service = QuestionService::new();
        let response = service.evaluate(&QuestionRequest::from_text("What is 2 plus 3?"));
        assert_eq!(response.result, "5");
        assert!(service.store().is_empty());
    }

    #[test]
    fn test_evaluate_keeps_fractional_results() {
        let service = QuestionService::new();
        let response = service.evaluate(&QuestionRequest::from_text("What is 7 divided by 2?"));
        assert_eq!(response.result, "3.5");
    }

    #[test]
    fn test_evaluate_failure_returns_reason_string_and_records() {
        let service = QuestionService::new();
        let question = "What is 15 divided 3?";
        let response = service.evaluate(&QuestionRequest::from_text(question));

        assert_eq!(response.result, "Invalid expression");
        assert_eq!(service.store().frequency(question, Endpoint::Evaluate), Some(1));
        assert_eq!(service.store().frequency(question, Endpoint::Validate), None);
    }

    #[test]
    fn test_validate_success_omits_reason() {
        let service = QuestionService::new();
        let response = service.validate(&QuestionRequest::from_text("What is 5 multiplied by 10?"));

        assert!(response.valid);
        assert_eq!(response.reason, None);

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("reason").is_none());
    }

    #[test]
    fn test_validate_failure_carries_reason_and_records() {
        let service = QuestionService::new();
        let question = "What day is it today?";
        let response = service.validate(&QuestionRequest::from_text(question));

        assert!(!response.valid);
        assert_eq!(response.reason.as_deref(), Some("Non-math question"));
        assert_eq!(service.store().frequency(question, Endpoint::Validate), Some(1));
    }

    #[test]
    fn test_same_question_tracks_endpoints_independently() {
        let service = QuestionService::new();
        let question = "What is 10 plus plus 20?";
        let request = QuestionRequest::from_text(question);

        service.evaluate(&request);
        service.evaluate(&request);
        service.validate(&request);

        assert_eq!(service.store().frequency(question, Endpoint::Evaluate), Some(2));
        assert_eq!(service.store().frequency(question, Endpoint::Validate), Some(1));
        assert_eq!(service.errors().len(), 2);
    }

    #[test]
    fn test_malformed_requests_are_rejected_and_not_recorded() {
        let service = QuestionService::new();

        let missing = QuestionRequest { expression: None };
        assert_eq!(service.evaluate(&missing).result, "Invalid JSON data");

        let empty = QuestionRequest::from_text("");
        let response = service.validate(&empty);
        assert!(!response.valid);
        assert_eq!(response.reason.as_deref(), Some("Invalid JSON data"));

        assert!(service.store().is_empty());
    }

    #[test]
    fn test_request_decoding_tolerates_missing_field() {
        let request: QuestionRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.expression, None);

        let request: QuestionRequest =
            serde_json::from_str(r#"{"expression": "What is 1 plus 1?"}"#).unwrap();
        assert_eq!(request.expression.as_deref(), Some("What is 1 plus 1?"));
    }

    #[test]
    fn test_shared_store_across_services() {
        let store = Arc::new(FailureStore::new());
        let first = QuestionService::with_store(Arc::clone(&store));
        let second = QuestionService::with_store(Arc::clone(&store));

        let question = "What is 1 divided by 0?";
        first.evaluate(&QuestionRequest::from_text(question));
        second.evaluate(&QuestionRequest::from_text(question));

        assert_eq!(store.frequency(question, Endpoint::Evaluate), Some(2));
    }
}
