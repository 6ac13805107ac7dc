//! Input accumulator for the "create assignment" form.

use chrono::{Days, NaiveDate};
use shared::protocol::NewAssignment;

use crate::error::DashboardError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentForm {
    pub employee_name: String,
    pub title: String,
    pub description: String,
    pub deadline: Option<NaiveDate>,
}

impl AssignmentForm {
    pub fn set_employee_name(&mut self, value: impl Into<String>) {
        self.employee_name = value.into();
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.title = value.into();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    pub fn set_deadline(&mut self, value: NaiveDate) {
        self.deadline = Some(value);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Earliest deadline the date picker offers. Submission does not check it.
    pub fn earliest_deadline(today: NaiveDate) -> NaiveDate {
        today.checked_add_days(Days::new(1)).unwrap_or(today)
    }

    pub fn to_request(&self) -> Result<NewAssignment, DashboardError> {
        let mut missing = Vec::new();
        if self.employee_name.trim().is_empty() {
            missing.push("employee");
        }
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.description.trim().is_empty() {
            missing.push("description");
        }
        let Some(deadline) = self.deadline else {
            missing.push("deadline");
            return Err(DashboardError::IncompleteForm { missing });
        };
        if !missing.is_empty() {
            return Err(DashboardError::IncompleteForm { missing });
        }

        Ok(NewAssignment {
            employee_name: self.employee_name.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            deadline,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("date")
    }

    #[test]
    fn earliest_deadline_is_tomorrow() {
        assert_eq!(
            AssignmentForm::earliest_deadline(date(2026, 12, 31)),
            date(2027, 1, 1)
        );
    }

    #[test]
    fn complete_form_becomes_request() {
        let mut form = AssignmentForm::default();
        form.set_employee_name("Alice");
        form.set_title("Audit");
        form.set_description("Q3 audit");
        form.set_deadline(date(2026, 10, 17));

        let request = form.to_request().expect("request");
        assert_eq!(request.employee_name, "Alice");
        assert_eq!(request.deadline, date(2026, 10, 17));
    }

    #[test]
    fn reports_every_missing_field() {
        let mut form = AssignmentForm::default();
        form.set_title("   ");
        form.set_description("something");

        let err = form.to_request().expect_err("incomplete");
        match err {
            DashboardError::IncompleteForm { missing } => {
                assert_eq!(missing, ["employee", "title", "deadline"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn clear_resets_all_fields() {
        let mut form = AssignmentForm {
            employee_name: "Bob".into(),
            title: "Docs".into(),
            description: "Write docs".into(),
            deadline: Some(date(2026, 11, 2)),
        };
        form.clear();
        assert!(form.is_empty());
    }
}
