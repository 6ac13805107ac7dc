//! Completion overview: the pie-chart projection of the summaries.

use serde::Serialize;

use crate::summary::CompletionSummary;

pub const OVERVIEW_PALETTE: [&str; 4] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewSlice {
    pub label: String,
    pub value: usize,
    pub color: &'static str,
    /// Fraction of all completed assignments that falls in this slice.
    pub share: f64,
}

pub fn completion_overview(summaries: &[CompletionSummary]) -> Vec<OverviewSlice> {
    let completed_total: usize = summaries.iter().map(|s| s.completed_count).sum();
    summaries
        .iter()
        .enumerate()
        .map(|(index, summary)| OverviewSlice {
            label: format!("{}: {}%", summary.employee_name, summary.percentage),
            value: summary.completed_count,
            color: OVERVIEW_PALETTE[index % OVERVIEW_PALETTE.len()],
            share: if completed_total == 0 {
                0.0
            } else {
                summary.completed_count as f64 / completed_total as f64
            },
        })
        .collect()
}
