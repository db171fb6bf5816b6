//! The fixed, system-owned employment taxonomy.

use serde::{Deserialize, Serialize};

/// The six fine-grained employment categories.
///
/// Every snapshot record classifies into exactly one of these. The set,
/// ordering, labels, and chart colors are owned by the system and fixed;
/// callers cannot extend or merge them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentCategory {
    /// Permanent employee.
    Tetap,
    /// Fixed-term contract (Perjanjian Kerja Waktu Tertentu).
    Pkwt,
    /// Work agreement letter (Surat Perjanjian Kerja).
    Spk,
    /// Daily casual worker (Tenaga Harian Lepas).
    Thl,
    /// Honorary worker (Honorer Jaminan Usaha).
    Hju,
    /// Seconded civil servant (PNS Diperbantukan).
    PnsDpk,
}

impl EmploymentCategory {
    /// All categories in the fixed report ordering.
    pub const ALL: [EmploymentCategory; 6] = [
        EmploymentCategory::Tetap,
        EmploymentCategory::Pkwt,
        EmploymentCategory::Spk,
        EmploymentCategory::Thl,
        EmploymentCategory::Hju,
        EmploymentCategory::PnsDpk,
    ];

    /// Returns the display label used on report sections.
    pub fn label(&self) -> &'static str {
        match self {
            EmploymentCategory::Tetap => "Tetap",
            EmploymentCategory::Pkwt => "PKWT",
            EmploymentCategory::Spk => "SPK",
            EmploymentCategory::Thl => "THL",
            EmploymentCategory::Hju => "HJU",
            EmploymentCategory::PnsDpk => "PNS DPK",
        }
    }

    /// Returns the fixed chart color assigned to this category.
    pub fn chart_color(&self) -> &'static str {
        match self {
            EmploymentCategory::Tetap => "#27AE60",
            EmploymentCategory::Pkwt => "#3498DB",
            EmploymentCategory::Spk => "#F39C12",
            EmploymentCategory::Thl => "#E74C3C",
            EmploymentCategory::Hju => "#9B59B6",
            EmploymentCategory::PnsDpk => "#1ABC9C",
        }
    }
}

/// Whether compensation is processed through payroll.
///
/// This is an orthogonal secondary classification: a record is both an
/// [`EmploymentCategory`] and a `PayrollStatus` (e.g. Tetap and Payroll).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PayrollStatus {
    /// Compensation runs through the company payroll.
    Payroll,
    /// Outsourced, intern, freelance, daily or honorary arrangements.
    NonPayroll,
}

impl PayrollStatus {
    /// Returns the display label used on report sections.
    pub fn label(&self) -> &'static str {
        match self {
            PayrollStatus::Payroll => "Payroll",
            PayrollStatus::NonPayroll => "Non-Payroll",
        }
    }
}
