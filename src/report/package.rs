//! The assembled report package.
//!
//! A package carries the five report sections in their fixed order together
//! with the header, footer, and the validation stamp. It is the engine's
//! final output; downstream consumers serialize it or feed it to a document
//! renderer, but never mutate it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::ReportPeriod;
use crate::report::aggregation::{MonthlyTrend, PayrollBreakdown, StatusDistribution, WorkforceTotals};
use crate::report::charts::ChartImageHandle;

/// Report title printed at the top of every package.
pub const REPORT_TITLE: &str = "LAPORAN STRUKTUR SDM";

/// Report header: the title block and the period it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportHeader {
    /// Fixed report title.
    pub title: String,
    /// Period subtitle, e.g. `Periode Maret 2025`.
    pub subtitle: String,
    /// The reporting period.
    pub period: ReportPeriod,
    /// Full Indonesian month name with year, e.g. `Maret 2025`.
    pub period_name: String,
}

impl ReportHeader {
    /// Builds the header for a period.
    pub fn for_period(period: ReportPeriod) -> Self {
        let period_name = format!("{} {}", period.month_name(), period.year());
        ReportHeader {
            title: REPORT_TITLE.to_string(),
            subtitle: format!("Periode {}", period_name),
            period,
            period_name,
        }
    }
}

/// Report footer: who produced the package and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFooter {
    /// Assembly timestamp in UTC.
    pub generated_at: DateTime<Utc>,
    /// Identity of the requester, as supplied to the assembler.
    pub generated_by: String,
}

/// Validation stamp recorded after reconciliation passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportValidation {
    /// True in every emitted package; a package is never assembled from
    /// unreconciled aggregates.
    pub reconciled: bool,
    /// The reconciled headcount all sections agree on.
    pub total_employees: u32,
}

/// The complete report package, sections in their fixed display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPackage {
    /// Unique id of this assembly run.
    pub report_id: Uuid,
    /// Title block.
    pub header: ReportHeader,
    /// Section 1: per-unit payroll breakdown table.
    pub payroll_table: PayrollBreakdown,
    /// Section 2: payroll versus non-payroll comparison chart.
    pub payroll_chart: ChartImageHandle,
    /// Section 3 data: per-unit workforce totals.
    pub workforce_totals: WorkforceTotals,
    /// Section 3 chart: per-unit workforce bar chart.
    pub workforce_chart: ChartImageHandle,
    /// Section 4: monthly trend table for the period's year.
    pub monthly_table: MonthlyTrend,
    /// Section 5 data: employment status distribution.
    pub status_distribution: StatusDistribution,
    /// Section 5 chart: status distribution pie chart.
    pub status_chart: ChartImageHandle,
    /// Footer block.
    pub footer: ReportFooter,
    /// Validation stamp.
    pub validation: ReportValidation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_for_period() {
        let period = ReportPeriod::new(2025, 3).unwrap();
        let header = ReportHeader::for_period(period);
        assert_eq!(header.title, "LAPORAN STRUKTUR SDM");
        assert_eq!(header.period_name, "Maret 2025");
        assert_eq!(header.subtitle, "Periode Maret 2025");
        assert_eq!(header.period, period);
    }

    #[test]
    fn test_header_december() {
        let period = ReportPeriod::new(2024, 12).unwrap();
        let header = ReportHeader::for_period(period);
        assert_eq!(header.period_name, "Desember 2024");
    }
}
