//! Report assembler: the end-to-end generation pipeline for one period.
//!
//! Assembly is all or nothing. Aggregation, reconciliation, and chart
//! rendering each run to completion before a package exists; the first
//! failure aborts the run and nothing partial is returned.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::ReportPeriod;
use crate::report::aggregation::{
    employment_status_distribution, monthly_trend, per_unit_payroll_breakdown,
    total_workforce_per_unit,
};
use crate::report::charts::{
    ChartRenderer, payroll_comparison_series, status_distribution_series, workforce_series,
};
use crate::report::package::{ReportFooter, ReportHeader, ReportPackage, ReportValidation};
use crate::report::reconciliation::validate;
use crate::snapshot::SnapshotStore;

/// Assembles the complete report package for a finalized period.
///
/// Runs the four aggregations over the period's snapshot, reconciles the
/// cross-representation totals, projects and renders the three charts, and
/// packages the sections in their fixed order. Errors from any stage
/// propagate unchanged.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::SnapshotNotFound`] when the period
/// has no finalized snapshot, `UnclassifiableRecord` when a snapshot record
/// defeats classification, `ReconciliationFailure` when the aggregates
/// disagree, and `RenderFailure` when the chart backend rejects a series.
pub fn assemble(
    store: &SnapshotStore,
    renderer: &dyn ChartRenderer,
    period: ReportPeriod,
    generated_by: &str,
) -> EngineResult<ReportPackage> {
    let report_id = Uuid::new_v4();
    info!(report_id = %report_id, period = %period, "Assembling report package");

    let payroll_table = per_unit_payroll_breakdown(store, period)?;
    let workforce_totals = total_workforce_per_unit(store, period)?;
    let status_distribution = employment_status_distribution(store, period)?;
    let monthly_table = monthly_trend(store, period.year())?;

    validate(&payroll_table, &workforce_totals, &status_distribution)?;

    let payroll_chart = renderer.render(&payroll_comparison_series(&payroll_table))?;
    let workforce_chart = renderer.render(&workforce_series(&workforce_totals))?;
    let status_chart = renderer.render(&status_distribution_series(&status_distribution))?;

    let validation = ReportValidation {
        reconciled: true,
        total_employees: workforce_totals.grand_total,
    };
    let package = ReportPackage {
        report_id,
        header: ReportHeader::for_period(period),
        payroll_table,
        payroll_chart,
        workforce_totals,
        workforce_chart,
        monthly_table,
        status_distribution,
        status_chart,
        footer: ReportFooter {
            generated_at: Utc::now(),
            generated_by: generated_by.to_string(),
        },
        validation,
    };

    info!(
        report_id = %report_id,
        period = %period,
        total_employees = package.validation.total_employees,
        "Report package assembled"
    );
    Ok(package)
}
