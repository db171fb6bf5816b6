//! Request types for the Workforce Report Engine API.

use serde::{Deserialize, Serialize};

/// Request body for POST /snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateSnapshotRequest {
    /// Reporting year.
    pub year: i32,
    /// Reporting month, 1 through 12.
    pub month: u32,
}

/// Request body for POST /reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateReportRequest {
    /// Reporting year.
    pub year: i32,
    /// Reporting month, 1 through 12.
    pub month: u32,
    /// Identity to record in the report footer. Defaults to `system`.
    #[serde(default)]
    pub generated_by: Option<String>,
}
