//! Per-employee completion statistics.

use std::collections::HashMap;

use serde::Serialize;
use shared::{
    domain::{AssignmentStatus, EmployeeId},
    protocol::{Assignment, Employee},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionSummary {
    pub employee_id: EmployeeId,
    pub employee_name: String,
    pub completed_count: usize,
    pub total_count: usize,
    pub pending_count: usize,
    pub in_progress_count: usize,
    pub percentage: u8,
}

#[derive(Debug, Default, Clone, Copy)]
struct StatusCounts {
    pending: usize,
    in_progress: usize,
    completed: usize,
}

impl StatusCounts {
    fn record(&mut self, status: AssignmentStatus) {
        match status {
            AssignmentStatus::Pending => self.pending += 1,
            AssignmentStatus::InProgress => self.in_progress += 1,
            AssignmentStatus::Completed => self.completed += 1,
        }
    }

    fn total(&self) -> usize {
        self.pending + self.in_progress + self.completed
    }
}

/// `round(100 * completed / total)` with halves rounded up, or 0 for an empty
/// total.
pub fn completion_percentage(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total);
    // floor(100c/t + 1/2) == floor((200c + t) / 2t)
    ((200 * completed + total) / (2 * total)) as u8
}

/// One summary per employee, in the order given. Assignments whose
/// `assigned_to` matches no employee do not count toward any summary.
pub fn compute_completion_summaries(
    employees: &[Employee],
    assignments: &[Assignment],
) -> Vec<CompletionSummary> {
    let mut counts: HashMap<&EmployeeId, StatusCounts> = HashMap::new();
    for assignment in assignments {
        counts
            .entry(&assignment.assigned_to)
            .or_default()
            .record(assignment.status);
    }

    employees
        .iter()
        .map(|employee| {
            let tally = counts.get(&employee.id).copied().unwrap_or_default();
            let total = tally.total();
            CompletionSummary {
                employee_id: employee.id.clone(),
                employee_name: employee.full_name.clone(),
                completed_count: tally.completed,
                total_count: total,
                pending_count: tally.pending,
                in_progress_count: tally.in_progress,
                percentage: completion_percentage(tally.completed, total),
            }
        })
        .collect()
}

/// Number of assignments that reference no known employee.
pub fn unattributed_count(employees: &[Employee], assignments: &[Assignment]) -> usize {
    assignments
        .iter()
        .filter(|assignment| {
            !employees
                .iter()
                .any(|employee| employee.id == assignment.assigned_to)
        })
        .count()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use shared::domain::AssignmentId;

    use super::*;

    fn employee(id: &str, name: &str) -> Employee {
        Employee {
            id: EmployeeId::new(id),
            full_name: name.to_string(),
        }
    }

    fn assignment(id: &str, owner: &str, status: AssignmentStatus) -> Assignment {
        Assignment {
            id: AssignmentId::new(id),
            assigned_to: EmployeeId::new(owner),
            title: format!("task {id}"),
            description: String::new(),
            deadline: NaiveDate::from_ymd_opt(2026, 11, 1).expect("date"),
            status,
        }
    }

    #[test]
    fn one_summary_per_employee_in_input_order() {
        let employees = vec![
            employee("e3", "Carol"),
            employee("e1", "Alice"),
            employee("e2", "Bob"),
        ];
        let assignments = vec![
            assignment("a1", "e1", AssignmentStatus::Completed),
            assignment("a2", "e2", AssignmentStatus::Pending),
        ];

        let summaries = compute_completion_summaries(&employees, &assignments);
        let names: Vec<_> = summaries.iter().map(|s| s.employee_name.as_str()).collect();
        assert_eq!(names, ["Carol", "Alice", "Bob"]);
    }

    #[test]
    fn employee_without_assignments_is_all_zero() {
        let employees = vec![employee("e1", "Alice")];
        let summaries = compute_completion_summaries(&employees, &[]);
        assert_eq!(
            summaries[0],
            CompletionSummary {
                employee_id: EmployeeId::new("e1"),
                employee_name: "Alice".into(),
                completed_count: 0,
                total_count: 0,
                pending_count: 0,
                in_progress_count: 0,
                percentage: 0,
            }
        );
    }

    #[test]
    fn two_of_three_completed_rounds_to_67() {
        let employees = vec![employee("e1", "Alice")];
        let assignments = vec![
            assignment("a1", "e1", AssignmentStatus::Completed),
            assignment("a2", "e1", AssignmentStatus::Completed),
            assignment("a3", "e1", AssignmentStatus::Pending),
        ];
        let summary = &compute_completion_summaries(&employees, &assignments)[0];
        assert_eq!(summary.completed_count, 2);
        assert_eq!(summary.pending_count, 1);
        assert_eq!(summary.total_count, 3);
        assert_eq!(summary.percentage, 67);
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(completion_percentage(1, 8), 13);
        assert_eq!(completion_percentage(1, 3), 33);
        assert_eq!(completion_percentage(2, 6), 33);
        assert_eq!(completion_percentage(1, 200), 1);
        assert_eq!(completion_percentage(5, 5), 100);
    }

    #[test]
    fn unknown_owner_is_excluded_and_counted_separately() {
        let employees = vec![employee("e1", "Alice")];
        let assignments = vec![
            assignment("a1", "e1", AssignmentStatus::InProgress),
            assignment("a2", "ghost", AssignmentStatus::Completed),
        ];
        let summaries = compute_completion_summaries(&employees, &assignments);
        assert_eq!(summaries[0].total_count, 1);
        assert_eq!(summaries[0].in_progress_count, 1);
        assert_eq!(summaries[0].completed_count, 0);
        assert_eq!(unattributed_count(&employees, &assignments), 1);
    }

    #[test]
    fn repeated_computation_is_identical() {
        let employees = vec![employee("e1", "Alice"), employee("e2", "Bob")];
        let assignments = vec![
            assignment("a1", "e1", AssignmentStatus::Completed),
            assignment("a2", "e2", AssignmentStatus::InProgress),
        ];
        assert_eq!(
            compute_completion_summaries(&employees, &assignments),
            compute_completion_summaries(&employees, &assignments)
        );
    }
}
