//! Chart-series projections and the renderer seam.
//!
//! Aggregates are projected into renderer-agnostic series (labels, datasets,
//! colors) only after reconciliation has passed. The actual image production
//! lives behind [`ChartRenderer`] so the pipeline can run against a real
//! backend in production and a stub in tests.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::report::aggregation::{PayrollBreakdown, StatusDistribution, WorkforceTotals};

/// Brand gradient endpoints used for the per-unit workforce bar chart.
const GRADIENT_START: &str = "#714B67";
const GRADIENT_END: &str = "#017E84";

/// Fixed colors for the payroll versus non-payroll comparison bars.
const PAYROLL_COLOR: &str = "#714B67";
const NON_PAYROLL_COLOR: &str = "#017E84";

/// The visual shape a series should be rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Vertical bar chart.
    Bar,
    /// Pie chart.
    Pie,
}

/// A single dataset within a chart: one value per label, with a color per
/// value for pie and gradient charts or a single repeated color for grouped
/// bars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartDataset {
    /// Legend label for this dataset.
    pub label: String,
    /// One value per chart label, in label order.
    pub data: Vec<u32>,
    /// Hex colors, one per value.
    pub colors: Vec<String>,
}

/// A complete renderer-agnostic chart description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Chart title as printed above the image.
    pub title: String,
    /// Visual shape of the chart.
    pub kind: ChartKind,
    /// Axis or slice labels, in display order.
    pub labels: Vec<String>,
    /// One or more datasets plotted against the labels.
    pub datasets: Vec<ChartDataset>,
}

/// Opaque reference to a rendered chart image.
///
/// The engine never inspects image bytes; the handle carries whatever
/// reference the renderer hands back (a storage key, a data URI, a path)
/// together with the series identity for traceability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartImageHandle {
    /// Renderer-issued reference to the produced image.
    pub reference: String,
    /// The shape that was rendered.
    pub kind: ChartKind,
    /// Title of the series the image was rendered from.
    pub title: String,
}

/// Rendering backend seam.
///
/// Implementations turn a validated [`ChartSeries`] into an image and return
/// an opaque handle. A failure maps to [`crate::error::EngineError::RenderFailure`]
/// and aborts report assembly.
pub trait ChartRenderer: Send + Sync {
    /// Renders one series to an image.
    fn render(&self, series: &ChartSeries) -> EngineResult<ChartImageHandle>;
}

/// Interpolates `count` hex colors evenly between two endpoint colors.
///
/// Endpoints must be `#RRGGBB`. A single requested color yields the start
/// endpoint; malformed endpoints fall back to repeating the start string
/// unmodified rather than failing the report.
///
/// # Example
///
/// ```
/// use workforce_engine::report::gradient_colors;
///
/// let colors = gradient_colors(3, "#000000", "#0000FF");
/// assert_eq!(colors, vec!["#000000", "#000080", "#0000FF"]);
/// ```
pub fn gradient_colors(count: usize, start: &str, end: &str) -> Vec<String> {
    if count == 0 {
        return Vec::new();
    }
    let (Some(from), Some(to)) = (parse_hex(start), parse_hex(end)) else {
        return vec![start.to_string(); count];
    };
    if count == 1 {
        return vec![start.to_string()];
    }
    (0..count)
        .map(|i| {
            let t = i as f64 / (count - 1) as f64;
            let channel = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
            format!(
                "#{:02X}{:02X}{:02X}",
                channel(from.0, to.0),
                channel(from.1, to.1),
                channel(from.2, to.2)
            )
        })
        .collect()
}

fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    Some((
        u8::from_str_radix(&hex[0..2], 16).ok()?,
        u8::from_str_radix(&hex[2..4], 16).ok()?,
        u8::from_str_radix(&hex[4..6], 16).ok()?,
    ))
}

/// Projects the payroll breakdown into a grouped bar series, one bar pair
/// per unit.
pub fn payroll_comparison_series(breakdown: &PayrollBreakdown) -> ChartSeries {
    let labels: Vec<String> = breakdown.rows.iter().map(|r| r.unit.clone()).collect();
    let payroll: Vec<u32> = breakdown.rows.iter().map(|r| r.payroll.total).collect();
    let non_payroll: Vec<u32> = breakdown.rows.iter().map(|r| r.non_payroll.total).collect();
    let bars = labels.len();
    ChartSeries {
        title: "Perbandingan Payroll vs Non-Payroll per Unit".to_string(),
        kind: ChartKind::Bar,
        labels,
        datasets: vec![
            ChartDataset {
                label: "Payroll".to_string(),
                data: payroll,
                colors: vec![PAYROLL_COLOR.to_string(); bars],
            },
            ChartDataset {
                label: "Non-Payroll".to_string(),
                data: non_payroll,
                colors: vec![NON_PAYROLL_COLOR.to_string(); bars],
            },
        ],
    }
}

/// Projects the executive workforce totals into a gradient bar series, one
/// bar per unit in the aggregate's display order.
pub fn workforce_series(workforce: &WorkforceTotals) -> ChartSeries {
    let labels: Vec<String> = workforce.units.iter().map(|u| u.unit.clone()).collect();
    let data: Vec<u32> = workforce.units.iter().map(|u| u.total).collect();
    let colors = gradient_colors(labels.len(), GRADIENT_START, GRADIENT_END);
    ChartSeries {
        title: "JUMLAH KARYAWAN (TERMASUK STATUS KHUSUS)".to_string(),
        kind: ChartKind::Bar,
        labels,
        datasets: vec![ChartDataset {
            label: "Jumlah Karyawan".to_string(),
            data,
            colors,
        }],
    }
}

/// Projects the status distribution into a pie series using each category's
/// fixed chart color.
pub fn status_distribution_series(distribution: &StatusDistribution) -> ChartSeries {
    let labels: Vec<String> = distribution.slices.iter().map(|s| s.label.clone()).collect();
    let data: Vec<u32> = distribution.slices.iter().map(|s| s.count).collect();
    let colors: Vec<String> = distribution.slices.iter().map(|s| s.color.clone()).collect();
    ChartSeries {
        title: "Distribusi Status Kepegawaian".to_string(),
        kind: ChartKind::Pie,
        labels,
        datasets: vec![ChartDataset {
            label: "Karyawan".to_string(),
            data,
            colors,
        }],
    }
}
