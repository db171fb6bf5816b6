//! Reconciliation validator: gates report assembly behind consistency checks.
//!
//! Every grand total is recomputed here independently from its constituent
//! parts and compared against the figure the aggregate carries. The
//! aggregation functions share no mutable state, so a mismatch can only
//! mean a data or logic defect. It is surfaced loudly and assembly stops.

use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};
use crate::report::aggregation::{PayrollBreakdown, StatusDistribution, WorkforceTotals};

fn mismatch(
    breakdown: &PayrollBreakdown,
    metric: impl Into<String>,
    expected: i64,
    actual: i64,
) -> EngineError {
    let period = breakdown.period;
    let metric = metric.into();
    warn!(
        period = %period,
        metric = %metric,
        expected,
        actual,
        "Reconciliation failed"
    );
    EngineError::ReconciliationFailure {
        year: period.year(),
        month: period.month(),
        metric,
        expected,
        actual,
    }
}

fn check(
    breakdown: &PayrollBreakdown,
    metric: impl Into<String>,
    expected: u32,
    actual: u32,
) -> EngineResult<()> {
    if expected != actual {
        return Err(mismatch(breakdown, metric, expected as i64, actual as i64));
    }
    Ok(())
}

/// Validates that the three period aggregates are mutually consistent.
///
/// Recomputes every total from its parts: gender sums per row, the
/// grand-total row, the per-unit executive totals and their category sums,
/// and the status distribution total. The first mismatch is returned as
/// [`EngineError::ReconciliationFailure`] with the metric name and both
/// values; a pass is logged.
pub fn validate(
    breakdown: &PayrollBreakdown,
    workforce: &WorkforceTotals,
    distribution: &StatusDistribution,
) -> EngineResult<()> {
    // Row-level gender sums and totals.
    let mut rows_total = 0u32;
    for row in &breakdown.rows {
        check(
            breakdown,
            format!("payroll_gender_sum:{}", row.unit),
            row.payroll.male + row.payroll.female,
            row.payroll.total,
        )?;
        check(
            breakdown,
            format!("non_payroll_gender_sum:{}", row.unit),
            row.non_payroll.male + row.non_payroll.female,
            row.non_payroll.total,
        )?;
        check(
            breakdown,
            format!("unit_total:{}", row.unit),
            row.payroll.total + row.non_payroll.total,
            row.total,
        )?;
        rows_total += row.total;
    }

    // Grand-total row against the sum of unit rows.
    check(breakdown, "grand_total_row", rows_total, breakdown.totals.total)?;
    check(
        breakdown,
        "grand_total_split",
        breakdown.totals.payroll.total + breakdown.totals.non_payroll.total,
        breakdown.totals.total,
    )?;

    // Executive figure: per-unit totals must match the table, unit by unit.
    if breakdown.rows.len() != workforce.units.len() {
        return Err(mismatch(
            breakdown,
            "unit_count",
            breakdown.rows.len() as i64,
            workforce.units.len() as i64,
        ));
    }
    for unit in &workforce.units {
        let Some(row) = breakdown.rows.iter().find(|r| r.unit == unit.unit) else {
            return Err(mismatch(
                breakdown,
                format!("workforce_unit_missing_in_table:{}", unit.unit),
                0,
                unit.total as i64,
            ));
        };
        check(
            breakdown,
            format!("workforce_unit_total:{}", unit.unit),
            row.total,
            unit.total,
        )?;
        let category_sum: u32 = unit.by_category.values().sum();
        check(
            breakdown,
            format!("category_sum:{}", unit.unit),
            unit.total,
            category_sum,
        )?;
    }

    let workforce_sum: u32 = workforce.units.iter().map(|u| u.total).sum();
    check(breakdown, "workforce_grand_total", workforce_sum, workforce.grand_total)?;
    check(
        breakdown,
        "table_vs_workforce_total",
        breakdown.totals.total,
        workforce.grand_total,
    )?;

    // Status distribution against the executive total.
    let slice_sum: u32 = distribution.slices.iter().map(|s| s.count).sum();
    check(breakdown, "distribution_slice_sum", slice_sum, distribution.total)?;
    check(
        breakdown,
        "distribution_vs_workforce_total",
        workforce.grand_total,
        distribution.total,
    )?;

    info!(
        period = %breakdown.period,
        total = breakdown.totals.total,
        "Reconciliation passed"
    );
    Ok(())
}
