//! Response types for the Workforce Report Engine API.
//!
//! This module defines the error response structures and the mapping from
//! engine errors to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Response body for a successful snapshot generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotGeneratedResponse {
    /// Reporting year of the finalized snapshot.
    pub year: i32,
    /// Reporting month of the finalized snapshot.
    pub month: u32,
    /// Number of records captured.
    pub record_count: usize,
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
        match error {
            EngineError::InvalidPeriod {
                year,
                month,
                message,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_PERIOD",
                    format!("Invalid reporting period {}-{:02}", year, month),
                    message,
                ),
            },
            EngineError::PeriodAlreadyFinalized { year, month } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "PERIOD_ALREADY_FINALIZED",
                    format!("Snapshot for {}-{:02} is already finalized", year, month),
                    "Finalized snapshots are immutable and cannot be regenerated",
                ),
            },
            EngineError::GenerationInProgress { year, month } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "GENERATION_IN_PROGRESS",
                    format!("Snapshot generation for {}-{:02} is in progress", year, month),
                    "Another generation run holds this period; retry after it completes",
                ),
            },
            EngineError::SnapshotNotFound { year, month } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "SNAPSHOT_NOT_FOUND",
                    format!("No finalized snapshot exists for {}-{:02}", year, month),
                    "Generate a snapshot for the period before requesting a report",
                ),
            },
            EngineError::UnclassifiableRecord {
                employee_id,
                status,
            } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "UNCLASSIFIABLE_RECORD",
                    format!("Employee '{}' cannot be classified", employee_id),
                    format!("Employment status '{}' matches no known category", status),
                ),
            },
            EngineError::ReconciliationFailure {
                year,
                month,
                metric,
                expected,
                actual,
            } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "RECONCILIATION_FAILURE",
                    format!("Report totals for {}-{:02} failed reconciliation", year, month),
                    format!("Metric '{}': expected {}, got {}", metric, expected, actual),
                ),
            },
            EngineError::RegistryUnavailable { message } => ApiErrorResponse {
                status: StatusCode::SERVICE_UNAVAILABLE,
                error: ApiError::with_details(
                    "REGISTRY_UNAVAILABLE",
                    "Employee registry is unavailable",
                    message,
                ),
            },
            EngineError::RenderFailure { chart, message } => ApiErrorResponse {
                status: StatusCode::BAD_GATEWAY,
                error: ApiError::with_details(
                    "RENDER_FAILURE",
                    format!("Chart rendering failed for '{}'", chart),
                    message,
                ),
            },
        }
    }
}
