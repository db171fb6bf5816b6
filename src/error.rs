//! Error types for the Workforce Report Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during snapshot generation and
//! report assembly.

use thiserror::Error;

/// The main error type for the Workforce Report Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use workforce_engine::error::EngineError;
///
/// let error = EngineError::SnapshotNotFound { year: 2025, month: 3 };
/// assert_eq!(error.to_string(), "No finalized snapshot exists for period 2025-03");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A (year, month) pair outside the supported reporting range.
    #[error("Invalid report period {year}-{month:02}: {message}")]
    InvalidPeriod {
        /// The rejected year.
        year: i32,
        /// The rejected month.
        month: u32,
        /// A description of which bound was violated.
        message: String,
    },

    /// Snapshot generation was requested for a period that is already frozen.
    #[error("Snapshot for period {year}-{month:02} is already finalized")]
    PeriodAlreadyFinalized {
        /// The year of the finalized period.
        year: i32,
        /// The month of the finalized period.
        month: u32,
    },

    /// Another snapshot generation for the same period is still running.
    #[error("Snapshot generation for period {year}-{month:02} is already in progress")]
    GenerationInProgress {
        /// The year of the contested period.
        year: i32,
        /// The month of the contested period.
        month: u32,
    },

    /// No finalized snapshot exists for the requested period.
    #[error("No finalized snapshot exists for period {year}-{month:02}")]
    SnapshotNotFound {
        /// The year of the missing period.
        year: i32,
        /// The month of the missing period.
        month: u32,
    },

    /// A snapshot record could not be mapped to any employment category.
    #[error("Employee '{employee_id}' cannot be classified from status '{status}'")]
    UnclassifiableRecord {
        /// The employee the record was captured for.
        employee_id: String,
        /// The raw employment status value that failed to classify.
        status: String,
    },

    /// Two representations of the same aggregate disagree.
    #[error(
        "Reconciliation failed for period {year}-{month:02}, metric '{metric}': \
         expected {expected}, got {actual}"
    )]
    ReconciliationFailure {
        /// The year of the period under validation.
        year: i32,
        /// The month of the period under validation.
        month: u32,
        /// The metric whose representations disagree.
        metric: String,
        /// The independently recomputed value.
        expected: i64,
        /// The value carried by the aggregate under test.
        actual: i64,
    },

    /// The employee registry could not be read.
    #[error("Employee registry unavailable: {message}")]
    RegistryUnavailable {
        /// A description of the registry failure.
        message: String,
    },

    /// The chart rendering collaborator failed to produce an image.
    #[error("Failed to render chart '{chart}': {message}")]
    RenderFailure {
        /// The title of the chart that failed to render.
        chart: String,
        /// A description of the rendering failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_period_displays_bounds_message() {
        let error = EngineError::InvalidPeriod {
            year: 2025,
            month: 13,
            message: "month must be between 1 and 12".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid report period 2025-13: month must be between 1 and 12"
        );
    }

    #[test]
    fn test_period_already_finalized_displays_period() {
        let error = EngineError::PeriodAlreadyFinalized {
            year: 2025,
            month: 1,
        };
        assert_eq!(
            error.to_string(),
            "Snapshot for period 2025-01 is already finalized"
        );
    }

    #[test]
    fn test_generation_in_progress_displays_period() {
        let error = EngineError::GenerationInProgress {
            year: 2025,
            month: 6,
        };
        assert_eq!(
            error.to_string(),
            "Snapshot generation for period 2025-06 is already in progress"
        );
    }

    #[test]
    fn test_snapshot_not_found_displays_period() {
        let error = EngineError::SnapshotNotFound {
            year: 2024,
            month: 11,
        };
        assert_eq!(
            error.to_string(),
            "No finalized snapshot exists for period 2024-11"
        );
    }

    #[test]
    fn test_unclassifiable_record_displays_employee_and_status() {
        let error = EngineError::UnclassifiableRecord {
            employee_id: "emp_042".to_string(),
            status: "alien".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Employee 'emp_042' cannot be classified from status 'alien'"
        );
    }

    #[test]
    fn test_reconciliation_failure_displays_full_context() {
        let error = EngineError::ReconciliationFailure {
            year: 2025,
            month: 1,
            metric: "grand_total".to_string(),
            expected: 120,
            actual: 119,
        };
        assert_eq!(
            error.to_string(),
            "Reconciliation failed for period 2025-01, metric 'grand_total': \
             expected 120, got 119"
        );
    }

    #[test]
    fn test_registry_unavailable_displays_message() {
        let error = EngineError::RegistryUnavailable {
            message: "connection refused".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Employee registry unavailable: connection refused"
        );
    }

    #[test]
    fn test_render_failure_displays_chart_and_message() {
        let error = EngineError::RenderFailure {
            chart: "Distribusi Status Kepegawaian".to_string(),
            message: "renderer timed out".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to render chart 'Distribusi Status Kepegawaian': renderer timed out"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> EngineResult<()> {
            Err(EngineError::SnapshotNotFound {
                year: 2025,
                month: 2,
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
