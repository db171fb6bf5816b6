//! HTTP request handlers for the Workforce Report Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::ReportPeriod;
use crate::report::assemble;

use super::request::{GenerateReportRequest, GenerateSnapshotRequest};
use super::response::{ApiError, ApiErrorResponse, SnapshotGeneratedResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/snapshots", post(generate_snapshot_handler))
        .route("/snapshots/:year/:month", get(snapshot_status_handler))
        .route("/reports", post(generate_report_handler))
        .with_state(state)
}

fn json_rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> axum::response::Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn engine_error_response(error: crate::error::EngineError) -> axum::response::Response {
    let api_error: ApiErrorResponse = error.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Handler for POST /snapshots.
///
/// Captures the registry into an immutable snapshot for the requested
/// period and finalizes it.
async fn generate_snapshot_handler(
    State(state): State<AppState>,
    payload: Result<Json<GenerateSnapshotRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing snapshot generation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let period = match ReportPeriod::new(request.year, request.month) {
        Ok(period) => period,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid period");
            return engine_error_response(err);
        }
    };

    match state.store().generate_snapshot(state.registry(), period) {
        Ok(record_count) => {
            info!(
                correlation_id = %correlation_id,
                period = %period,
                record_count,
                "Snapshot finalized"
            );
            (
                StatusCode::CREATED,
                [(header::CONTENT_TYPE, "application/json")],
                Json(SnapshotGeneratedResponse {
                    year: period.year(),
                    month: period.month(),
                    record_count,
                }),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                period = %period,
                error = %err,
                "Snapshot generation failed"
            );
            engine_error_response(err)
        }
    }
}

/// Handler for GET /snapshots/:year/:month.
///
/// Returns the period's lifecycle state and, when finalized, its record
/// count.
async fn snapshot_status_handler(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
) -> impl IntoResponse {
    let period = match ReportPeriod::new(year, month) {
        Ok(period) => period,
        Err(err) => return engine_error_response(err),
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(state.store().status(period)),
    )
        .into_response()
}

/// Handler for POST /reports.
///
/// Assembles the complete report package for a finalized period.
async fn generate_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<GenerateReportRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report generation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let period = match ReportPeriod::new(request.year, request.month) {
        Ok(period) => period,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid period");
            return engine_error_response(err);
        }
    };
    let generated_by = request.generated_by.unwrap_or_else(|| "system".to_string());

    let start_time = Instant::now();
    match assemble(state.store(), state.charts(), period, &generated_by) {
        Ok(package) => {
            info!(
                correlation_id = %correlation_id,
                report_id = %package.report_id,
                period = %period,
                total_employees = package.validation.total_employees,
                duration_us = start_time.elapsed().as_micros(),
                "Report assembled successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(package),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                period = %period,
                error = %err,
                "Report assembly failed"
            );
            engine_error_response(err)
        }
    }
}
