//! Reporting period model and related types.
//!
//! A period identifies one monthly snapshot. Periods are the key of the
//! snapshot store and appear on every report section header.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{EngineError, EngineResult};

/// Indonesian month names as rendered on the official report.
const MONTH_NAMES: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Abbreviated month names used in the monthly trend table header.
const MONTH_NAMES_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

/// Returns the full Indonesian name of a month (1-based).
///
/// # Panics
///
/// Panics if `month` is outside `1..=12`. Callers obtain months from a
/// validated [`ReportPeriod`], so the bound always holds.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month - 1) as usize]
}

/// Returns the abbreviated Indonesian name of a month (1-based).
///
/// # Panics
///
/// Panics if `month` is outside `1..=12`.
pub fn month_name_short(month: u32) -> &'static str {
    MONTH_NAMES_SHORT[(month - 1) as usize]
}

/// The lifecycle state of a snapshot period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodState {
    /// No snapshot has been generated for the period.
    Absent,
    /// A snapshot generation is currently running.
    Generating,
    /// The snapshot completed and the period is locked against writes.
    Finalized,
}

/// Identifies one monthly reporting period.
///
/// Construction is validated so that every `ReportPeriod` in circulation
/// carries a legal (year, month) pair.
///
/// # Example
///
/// ```
/// use workforce_engine::models::ReportPeriod;
///
/// let period = ReportPeriod::new(2025, 1).unwrap();
/// assert_eq!(period.label(), "Januari 2025");
/// assert!(ReportPeriod::new(2025, 13).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ReportPeriod {
    year: i32,
    month: u32,
}

impl ReportPeriod {
    /// Creates a validated period.
    ///
    /// Months must fall in `1..=12` and years in `2000..=2100`, matching the
    /// constraints the snapshot schema enforces.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::InvalidPeriod {
                year,
                month,
                message: "month must be between 1 and 12".to_string(),
            });
        }
        if !(2000..=2100).contains(&year) {
            return Err(EngineError::InvalidPeriod {
                year,
                month,
                message: "year must be between 2000 and 2100".to_string(),
            });
        }
        Ok(Self { year, month })
    }

    /// Returns the period's year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the period's month (1-based).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the snapshot cut-off date: the last day of the month.
    pub fn cutoff_date(&self) -> NaiveDate {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        // First day of the following month is always a valid date here.
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .unwrap_or_default()
            .pred_opt()
            .unwrap_or_default()
    }

    /// Returns the full Indonesian month name of the period.
    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }

    /// Returns the human-readable period label, e.g. `"Januari 2025"`.
    pub fn label(&self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}
