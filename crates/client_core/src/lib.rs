//! Client core for the assignment dashboard: the store seam, its HTTP
//! implementation, completion aggregation and the workflow controller.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use shared::{
    domain::{AssignmentId, AssignmentStatus, EmployeeId},
    protocol::{Assignment, Employee, NewAssignment},
};

pub mod dashboard;
pub mod error;
pub mod form;
mod http_store;
pub mod overview;
pub mod summary;

pub use dashboard::{DashboardController, DashboardState};
pub use error::{DashboardError, Operation};
pub use form::AssignmentForm;
pub use http_store::HttpAssignmentStore;
pub use overview::{completion_overview, OverviewSlice};
pub use summary::{compute_completion_summaries, unattributed_count, CompletionSummary};

/// Data source for employees and their assignments.
///
/// Every call is a round trip; implementations keep no view state of their own.
#[async_trait]
pub trait AssignmentStore: Send + Sync {
    async fn fetch_employees(&self) -> Result<Vec<Employee>>;
    async fn fetch_employee_assignments(&self, employee_id: &EmployeeId)
        -> Result<Vec<Assignment>>;
    async fn assign_work(&self, request: &NewAssignment) -> Result<Assignment>;
    async fn update_assignment_status(
        &self,
        assignment_id: &AssignmentId,
        status: AssignmentStatus,
    ) -> Result<Assignment>;
}

pub struct MissingAssignmentStore;

#[async_trait]
impl AssignmentStore for MissingAssignmentStore {
    async fn fetch_employees(&self) -> Result<Vec<Employee>> {
        Err(anyhow!("assignment store unavailable"))
    }

    async fn fetch_employee_assignments(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Vec<Assignment>> {
        Err(anyhow!(
            "assignment store unavailable for employee {employee_id}"
        ))
    }

    async fn assign_work(&self, request: &NewAssignment) -> Result<Assignment> {
        Err(anyhow!(
            "assignment store unavailable; cannot assign '{}' to {}",
            request.title,
            request.employee_name
        ))
    }

    async fn update_assignment_status(
        &self,
        assignment_id: &AssignmentId,
        _status: AssignmentStatus,
    ) -> Result<Assignment> {
        Err(anyhow!(
            "assignment store unavailable for assignment {assignment_id}"
        ))
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
