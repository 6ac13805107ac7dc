//! Plain-text tables for the terminal.

use std::fmt::Write as _;

use client_core::{CompletionSummary, OverviewSlice};
use shared::protocol::Assignment;

pub fn status_table(summaries: &[CompletionSummary]) -> String {
    let name_width = summaries
        .iter()
        .map(|s| s.employee_name.chars().count())
        .chain(std::iter::once("Employee".len()))
        .max()
        .unwrap_or_default();

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<name_width$}  {:>5}  {:>7}  {:>11}  {:>9}  {:>15}",
        "Employee", "Total", "Pending", "In Progress", "Completed", "Completion Rate"
    );
    for s in summaries {
        let _ = writeln!(
            out,
            "{:<name_width$}  {:>5}  {:>7}  {:>11}  {:>9}  {:>14}%",
            s.employee_name,
            s.total_count,
            s.pending_count,
            s.in_progress_count,
            s.completed_count,
            s.percentage
        );
    }
    out
}

pub fn overview(slices: &[OverviewSlice]) -> String {
    let mut out = String::new();
    for slice in slices {
        let _ = writeln!(
            out,
            "{} {:<30} {:>4} completed ({:.0}% of all)",
            slice.color,
            slice.label,
            slice.value,
            slice.share * 100.0
        );
    }
    out
}

pub fn assignment_list(assignments: &[Assignment]) -> String {
    if assignments.is_empty() {
        return "No assignments.\n".to_string();
    }
    let mut out = String::new();
    for a in assignments {
        let _ = writeln!(
            out,
            "{:<12} {:<11} {}  {} - {}",
            a.id.as_str(),
            a.status.as_str(),
            a.deadline.format("%Y-%m-%d"),
            a.title,
            a.description
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use shared::domain::EmployeeId;

    use super::*;

    #[test]
    fn status_table_lists_each_employee_with_rate() {
        let table = status_table(&[CompletionSummary {
            employee_id: EmployeeId::new("e1"),
            employee_name: "Alice".into(),
            completed_count: 2,
            total_count: 3,
            pending_count: 1,
            in_progress_count: 0,
            percentage: 67,
        }]);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Employee"));
        assert!(lines[1].starts_with("Alice"));
        assert!(lines[1].ends_with("67%"));
    }

    #[test]
    fn empty_assignment_list_says_so() {
        assert_eq!(assignment_list(&[]), "No assignments.\n");
    }
}
