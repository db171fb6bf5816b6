//! Report pipeline for the Workforce Report Engine.
//!
//! This module contains the aggregation engine that reduces finalized
//! snapshots into report metrics, the reconciliation validator that gates
//! assembly behind consistency checks, the chart-series projections, and
//! the assembler that packages everything for the external renderer.

mod aggregation;
mod assembler;
mod charts;
mod package;
mod reconciliation;

pub use aggregation::{
    BreakdownTotals, GenderCount, MonthlyTrend, MonthlyTrendRow, PayrollBreakdown,
    StatusDistribution, StatusSlice, UnitPayrollRow, UnitWorkforce, WorkforceTotals,
    employment_status_distribution, monthly_trend, per_unit_payroll_breakdown,
    total_workforce_per_unit,
};
pub use assembler::assemble;
pub use charts::{
    ChartDataset, ChartImageHandle, ChartKind, ChartRenderer, ChartSeries, gradient_colors,
    payroll_comparison_series, status_distribution_series, workforce_series,
};
pub use package::{ReportFooter, ReportHeader, ReportPackage, ReportValidation};
pub use reconciliation::validate;
