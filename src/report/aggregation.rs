//! Aggregation engine: reduces a finalized period's classified records into
//! the metrics the report needs.
//!
//! All operations here are pure functions of the frozen snapshot. None of
//! them performs a live query, so regenerating a report for the same
//! finalized period yields identical figures. The unit universe of a period
//! is every unit present in its records (active or not); counts tally only
//! employees active at capture time, so a unit whose staff all went inactive
//! still appears with zero counts instead of being omitted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::classification::{
    EmploymentCategory, PayrollStatus, classify_payroll_status, classify_record,
};
use crate::error::EngineResult;
use crate::models::{
    EmployeeSnapshotRecord, Gender, PeriodState, ReportPeriod, month_name_short,
};
use crate::snapshot::SnapshotStore;

/// Counts of one population split by gender.
///
/// The report's gender columns are male and female; registry records with
/// an unspecified gender are folded into the female column, matching the
/// official report layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderCount {
    /// Male headcount.
    pub male: u32,
    /// Female (and unspecified) headcount.
    pub female: u32,
    /// Sum of both columns.
    pub total: u32,
}

impl GenderCount {
    fn tally(&mut self, gender: Gender) {
        match gender {
            Gender::Male => self.male += 1,
            Gender::Female | Gender::Other => self.female += 1,
        }
        self.total += 1;
    }
}

/// One unit's row in the payroll vs non-payroll table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitPayrollRow {
    /// Organizational unit name.
    pub unit: String,
    /// Payroll headcount by gender.
    pub payroll: GenderCount,
    /// Non-payroll headcount by gender.
    pub non_payroll: GenderCount,
    /// Total headcount of the unit.
    pub total: u32,
}

/// The grand-total row of the payroll vs non-payroll table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownTotals {
    /// Payroll totals across all units.
    pub payroll: GenderCount,
    /// Non-payroll totals across all units.
    pub non_payroll: GenderCount,
    /// Grand total headcount.
    pub total: u32,
}

/// The primary report table: payroll vs non-payroll per unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollBreakdown {
    /// The period the table was computed for.
    pub period: ReportPeriod,
    /// Per-unit rows, ascending by unit name.
    pub rows: Vec<UnitPayrollRow>,
    /// Grand-total row.
    pub totals: BreakdownTotals,
    /// Number of active records the table was computed from.
    pub snapshot_count: usize,
}

/// One unit's entry in the total-workforce executive figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitWorkforce {
    /// Organizational unit name.
    pub unit: String,
    /// Payroll headcount.
    pub payroll: u32,
    /// Non-payroll headcount.
    pub non_payroll: u32,
    /// Headcount per fine-grained category; every category key is present.
    pub by_category: BTreeMap<EmploymentCategory, u32>,
    /// Total workforce of the unit.
    pub total: u32,
}

/// The executive figure: total workforce per unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkforceTotals {
    /// The period the figure was computed for.
    pub period: ReportPeriod,
    /// Per-unit entries, descending by total then ascending by name.
    pub units: Vec<UnitWorkforce>,
    /// Sum over all units.
    pub grand_total: u32,
}

/// One category's share of the employment status distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSlice {
    /// The employment category.
    pub category: EmploymentCategory,
    /// Display label of the category.
    pub label: String,
    /// Headcount in this category.
    pub count: u32,
    /// Share of the total, one decimal place.
    pub percentage: Decimal,
    /// Fixed chart color of the category.
    pub color: String,
}

/// Distribution of the workforce over the six employment categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDistribution {
    /// The period the distribution was computed for.
    pub period: ReportPeriod,
    /// Slices in the fixed category order.
    pub slices: Vec<StatusSlice>,
    /// Sum over all slices.
    pub total: u32,
}

/// One unit's row in the January–December trend table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTrendRow {
    /// Organizational unit name.
    pub unit: String,
    /// Headcount per month (index 0 = January). `None` marks a month with
    /// no finalized snapshot, explicitly missing rather than zero-filled.
    pub months: Vec<Option<u32>>,
    /// Average over months with data, one decimal place.
    pub average: Decimal,
}

/// The monthly workforce trend table for one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTrend {
    /// The year covered by the table.
    pub year: i32,
    /// Rendered column headers: unit, the twelve months, average.
    pub headers: Vec<String>,
    /// Per-unit rows, ascending by unit name.
    pub rows: Vec<MonthlyTrendRow>,
    /// Per-month grand totals; `None` for months without a snapshot.
    pub month_totals: Vec<Option<u32>>,
    /// Average of the grand totals over months with data.
    pub total_average: Decimal,
    /// Months (1-based) that have a finalized snapshot.
    pub available_months: Vec<u32>,
}

/// Every unit present in the period's records, active or not.
fn unit_universe(records: &[EmployeeSnapshotRecord]) -> BTreeSet<String> {
    records.iter().map(|r| r.unit.clone()).collect()
}

/// Generates the payroll vs non-payroll table for a finalized period.
///
/// Rows are ordered by unit name; units without active employees appear
/// with all-zero counts. The grand-total row is the column-wise sum of the
/// unit rows.
pub fn per_unit_payroll_breakdown(
    store: &SnapshotStore,
    period: ReportPeriod,
) -> EngineResult<PayrollBreakdown> {
    let records = store.records(period)?;

    let mut by_unit: BTreeMap<String, (GenderCount, GenderCount)> = unit_universe(&records)
        .into_iter()
        .map(|unit| (unit, (GenderCount::default(), GenderCount::default())))
        .collect();

    let mut snapshot_count = 0;
    for record in records.iter().filter(|r| r.is_active) {
        snapshot_count += 1;
        let entry = by_unit.entry(record.unit.clone()).or_default();
        match classify_payroll_status(record) {
            PayrollStatus::Payroll => entry.0.tally(record.gender),
            PayrollStatus::NonPayroll => entry.1.tally(record.gender),
        }
    }

    let mut totals = BreakdownTotals::default();
    let rows: Vec<UnitPayrollRow> = by_unit
        .into_iter()
        .map(|(unit, (payroll, non_payroll))| {
            totals.payroll.male += payroll.male;
            totals.payroll.female += payroll.female;
            totals.payroll.total += payroll.total;
            totals.non_payroll.male += non_payroll.male;
            totals.non_payroll.female += non_payroll.female;
            totals.non_payroll.total += non_payroll.total;
            let total = payroll.total + non_payroll.total;
            totals.total += total;
            UnitPayrollRow {
                unit,
                payroll,
                non_payroll,
                total,
            }
        })
        .collect();

    Ok(PayrollBreakdown {
        period,
        rows,
        totals,
        snapshot_count,
    })
}

/// Generates the executive total-workforce-per-unit figure.
///
/// The official formula is `Payroll + Non-Payroll + HJU + PNS DPK`; HJU and
/// PNS DPK employees already carry a non-payroll status, so the formula
/// counts each active employee exactly once. This function is the single
/// source of the figure; both the executive chart and the reconciliation
/// cross-check consume its output rather than recomputing it.
pub fn total_workforce_per_unit(
    store: &SnapshotStore,
    period: ReportPeriod,
) -> EngineResult<WorkforceTotals> {
    let records = store.records(period)?;

    let empty_categories: BTreeMap<EmploymentCategory, u32> = EmploymentCategory::ALL
        .into_iter()
        .map(|category| (category, 0))
        .collect();

    let mut by_unit: BTreeMap<String, UnitWorkforce> = unit_universe(&records)
        .into_iter()
        .map(|unit| {
            (
                unit.clone(),
                UnitWorkforce {
                    unit,
                    payroll: 0,
                    non_payroll: 0,
                    by_category: empty_categories.clone(),
                    total: 0,
                },
            )
        })
        .collect();

    for record in records.iter().filter(|r| r.is_active) {
        let classification = classify_record(record)?;
        let entry = by_unit
            .entry(record.unit.clone())
            .or_insert_with(|| UnitWorkforce {
                unit: record.unit.clone(),
                payroll: 0,
                non_payroll: 0,
                by_category: empty_categories.clone(),
                total: 0,
            });
        match classification.payroll_status {
            PayrollStatus::Payroll => entry.payroll += 1,
            PayrollStatus::NonPayroll => entry.non_payroll += 1,
        }
        *entry.by_category.entry(classification.category).or_default() += 1;
        entry.total += 1;
    }

    let mut units: Vec<UnitWorkforce> = by_unit.into_values().collect();
    units.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.unit.cmp(&b.unit)));
    let grand_total = units.iter().map(|u| u.total).sum();

    Ok(WorkforceTotals {
        period,
        units,
        grand_total,
    })
}

/// Generates the employment status distribution over the six categories.
///
/// Slices follow the fixed category order; the slice counts sum to the
/// period's total workforce figure.
pub fn employment_status_distribution(
    store: &SnapshotStore,
    period: ReportPeriod,
) -> EngineResult<StatusDistribution> {
    let records = store.records(period)?;

    let mut counts: BTreeMap<EmploymentCategory, u32> = EmploymentCategory::ALL
        .into_iter()
        .map(|category| (category, 0))
        .collect();

    for record in records.iter().filter(|r| r.is_active) {
        let classification = classify_record(record)?;
        *counts.entry(classification.category).or_default() += 1;
    }

    let total: u32 = counts.values().sum();

    let slices = EmploymentCategory::ALL
        .into_iter()
        .map(|category| {
            let count = counts[&category];
            let percentage = if total > 0 {
                (Decimal::from(count * 100) / Decimal::from(total)).round_dp(1)
            } else {
                Decimal::ZERO
            };
            StatusSlice {
                category,
                label: category.label().to_string(),
                count,
                percentage,
                color: category.chart_color().to_string(),
            }
        })
        .collect();

    Ok(StatusDistribution {
        period,
        slices,
        total,
    })
}

/// Average over the months that actually carry data, one decimal place.
///
/// Months without a snapshot and months where the value is zero are both
/// excluded, matching the official report's average rule.
fn average_with_data(values: &[Option<u32>]) -> Decimal {
    let with_data: Vec<u32> = values.iter().filter_map(|v| *v).filter(|v| *v > 0).collect();
    if with_data.is_empty() {
        return Decimal::ZERO;
    }
    let sum: u32 = with_data.iter().sum();
    (Decimal::from(sum) / Decimal::from(with_data.len() as u32)).round_dp(1)
}

/// Generates the January–December workforce trend table for one year.
///
/// Months whose period has no finalized snapshot are reported as explicitly
/// missing (`None`), never interpolated and never zero-filled; downstream
/// rendering shows them as "no data".
pub fn monthly_trend(store: &SnapshotStore, year: i32) -> EngineResult<MonthlyTrend> {
    let mut available_months = Vec::new();
    let mut month_counts: Vec<Option<BTreeMap<String, u32>>> = Vec::with_capacity(12);
    let mut units: BTreeSet<String> = BTreeSet::new();

    for month in 1..=12 {
        let period = ReportPeriod::new(year, month)?;
        if store.status(period).state != PeriodState::Finalized {
            month_counts.push(None);
            continue;
        }
        let records = store.records(period)?;
        units.extend(unit_universe(&records));

        let mut counts: BTreeMap<String, u32> = BTreeMap::new();
        for record in records.iter().filter(|r| r.is_active) {
            *counts.entry(record.unit.clone()).or_default() += 1;
        }
        month_counts.push(Some(counts));
        available_months.push(month);
    }

    let rows: Vec<MonthlyTrendRow> = units
        .into_iter()
        .map(|unit| {
            let months: Vec<Option<u32>> = month_counts
                .iter()
                .map(|counts| {
                    counts
                        .as_ref()
                        .map(|c| c.get(&unit).copied().unwrap_or(0))
                })
                .collect();
            let average = average_with_data(&months);
            MonthlyTrendRow {
                unit,
                months,
                average,
            }
        })
        .collect();

    let month_totals: Vec<Option<u32>> = (0..12)
        .map(|idx| {
            month_counts[idx]
                .as_ref()
                .map(|_| rows.iter().filter_map(|row| row.months[idx]).sum())
        })
        .collect();
    let total_average = average_with_data(&month_totals);

    let mut headers = vec!["Unit".to_string()];
    headers.extend((1..=12).map(|m| month_name_short(m).to_string()));
    headers.push("Rata-rata".to_string());

    Ok(MonthlyTrend {
        year,
        headers,
        rows,
        month_totals,
        total_average,
        available_months,
    })
}
