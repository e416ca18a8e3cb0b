//! Response types for the Valuation Engine API.
//!
//! This module defines the response envelopes, the error response
//! structures, and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::ValuationResult;

/// Engine version reported in every response envelope.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Response body for the `/valuate` endpoint.
///
/// The envelope carries the only per-request fields; `result` is the same
/// for identical inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that performed the calculation.
    pub engine_version: String,
    /// The valuation.
    pub result: ValuationResult,
}

/// Response body for the `/valuate/batch` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchValuationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that performed the calculation.
    pub engine_version: String,
    /// One valuation per input, in request order.
    pub results: Vec<ValuationResult>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidPolicy { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    message,
                ),
            },
            EngineError::UnknownCategory { value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNKNOWN_CATEGORY",
                    message,
                    format!(
                        "'{}' is not one of: Executive / Senior Leadership, Senior Specialist",
                        value
                    ),
                ),
            },
            EngineError::InvalidDateRange { entity_id, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DATE_RANGE",
                    message,
                    format!("Check the travel dates recorded for '{}'", entity_id),
                ),
            },
            EngineError::InvalidInput { field, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details("INVALID_INPUT", message, field),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_unknown_category_maps_to_400() {
        let api_error: ApiErrorResponse = EngineError::UnknownCategory {
            value: "Intern".to_string(),
        }
        .into();

        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "UNKNOWN_CATEGORY");
        assert!(api_error.error.message.contains("Intern"));
    }

    #[test]
    fn test_invalid_date_range_maps_to_400() {
        let api_error: ApiErrorResponse = EngineError::InvalidDateRange {
            entity_id: "trip_009".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        }
        .into();

        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_DATE_RANGE");
        assert!(api_error.error.message.contains("trip_009"));
    }

    #[test]
    fn test_invalid_input_carries_field() {
        let api_error: ApiErrorResponse = EngineError::InvalidInput {
            entity_id: "trip_001".to_string(),
            field: "airfare_estimate".to_string(),
            message: "must not be negative".to_string(),
        }
        .into();

        assert_eq!(api_error.error.code, "INVALID_INPUT");
        assert_eq!(api_error.error.details.as_deref(), Some("airfare_estimate"));
    }

    #[test]
    fn test_config_errors_map_to_500() {
        let api_error: ApiErrorResponse = EngineError::InvalidPolicy {
            field: "labor.preparation".to_string(),
            message: "must not be negative".to_string(),
        }
        .into();

        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }
}
