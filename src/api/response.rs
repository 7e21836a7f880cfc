//! Response types for the payroll engine API.
//!
//! This module defines the report response body plus the error response
//! structures and status-code mapping for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{ComputedRecord, ReportTotals};

/// Successful response body for a processed attendance report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportResponse {
    /// One computed record per extracted employee-day, in source order.
    pub records: Vec<ComputedRecord>,
    /// Aggregate totals over the records.
    pub totals: ReportTotals,
    /// Employee ids seen for the first time, provisioned at a zero rate.
    pub new_employees: Vec<String>,
    /// Whether the provisioned rate table reached the store. `false` means
    /// the results are valid but the zero-rate defaults were not saved.
    pub rates_persisted: bool,
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
        match &error {
            EngineError::TableNotFound => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "TABLE_NOT_FOUND",
                    error.to_string(),
                    "Save the report frame of the export, not the menu frame",
                ),
            },
            EngineError::MalformedTimestamp { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "MALFORMED_TIMESTAMP",
                    error.to_string(),
                    "A cell in the punch columns is not an HH:MM:SS time",
                ),
            },
            EngineError::PersistenceFailure { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new("PERSISTENCE_FAILURE", error.to_string()),
            },
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::new("CONFIG_ERROR", error.to_string()),
                }
            }
            EngineError::InvalidRate { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_RATE", error.to_string()),
            },
            EngineError::ExportFailure { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new("EXPORT_FAILURE", error.to_string()),
            },
        }
    }
}
