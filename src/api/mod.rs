//! HTTP API for the Workforce Report Engine.
//!
//! This module provides the REST interface: snapshot generation, snapshot
//! status lookup, and report assembly.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{GenerateReportRequest, GenerateSnapshotRequest};
pub use response::{ApiError, ApiErrorResponse, SnapshotGeneratedResponse};
pub use state::AppState;
