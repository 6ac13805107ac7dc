//! Workflow controller for the assignment dashboard.
//!
//! The controller owns the view state (selected employee, cached lists, the
//! creation form) and forwards every mutation to the injected
//! [`AssignmentStore`]. Mutations are never applied locally: after a store call
//! succeeds the selected employee's assignments are fetched again, so the cache
//! only ever reflects what the store returned.
//!
//! Failures are logged and handed back to the caller; they leave the view state
//! as it was before the failing step.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use anyhow::Result;
use shared::{
    domain::{AssignmentId, AssignmentStatus, EmployeeId},
    protocol::{Assignment, Employee},
};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::{
    error::{DashboardError, Operation},
    form::AssignmentForm,
    summary::{compute_completion_summaries, unattributed_count, CompletionSummary},
    AssignmentStore, MissingAssignmentStore,
};

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub employees: Vec<Employee>,
    pub assignments: Vec<Assignment>,
    pub selected_employee: Option<EmployeeId>,
    pub form: AssignmentForm,
    pub show_create_form: bool,
    pub is_assigning: bool,
}

pub struct DashboardController {
    store: Arc<dyn AssignmentStore>,
    state: Mutex<DashboardState>,
    assigning: AtomicBool,
}

/// Holds the busy flag for one creation request and clears it when dropped,
/// including when the submitting future is dropped mid-request.
struct AssigningGuard<'a>(&'a AtomicBool);

impl<'a> AssigningGuard<'a> {
    fn raise(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for AssigningGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl DashboardController {
    pub fn new(store: Arc<dyn AssignmentStore>) -> Self {
        Self {
            store,
            state: Mutex::new(DashboardState::default()),
            assigning: AtomicBool::new(false),
        }
    }

    pub fn unconfigured() -> Self {
        Self::new(Arc::new(MissingAssignmentStore))
    }

    pub async fn snapshot(&self) -> DashboardState {
        let mut state = self.state.lock().await.clone();
        state.is_assigning = self.is_assigning();
        state
    }

    /// True while a creation request is waiting on the store.
    pub fn is_assigning(&self) -> bool {
        self.assigning.load(Ordering::SeqCst)
    }

    pub async fn selected_employee(&self) -> Option<EmployeeId> {
        self.state.lock().await.selected_employee.clone()
    }

    /// Loads the employee list and selects the first employee, if any.
    pub async fn initialize(&self) -> Result<(), DashboardError> {
        let employees = self
            .store
            .fetch_employees()
            .await
            .map_err(|err| log_failure(Operation::Initialize, err))?;
        let first = employees.first().map(|employee| employee.id.clone());
        debug!(count = employees.len(), "loaded employees");
        self.state.lock().await.employees = employees;

        let Some(employee_id) = first else {
            return Ok(());
        };
        self.state.lock().await.selected_employee = Some(employee_id.clone());
        let assignments = self
            .store
            .fetch_employee_assignments(&employee_id)
            .await
            .map_err(|err| log_failure(Operation::Initialize, err))?;
        self.state.lock().await.assignments = assignments;
        Ok(())
    }

    /// Selects `employee_id` and loads its assignments. The id is not checked
    /// against the cached employee list.
    pub async fn select_employee(&self, employee_id: EmployeeId) -> Result<(), DashboardError> {
        self.state.lock().await.selected_employee = Some(employee_id.clone());
        let assignments = self
            .store
            .fetch_employee_assignments(&employee_id)
            .await
            .map_err(|err| log_failure(Operation::SelectEmployee, err))?;
        self.state.lock().await.assignments = assignments;
        Ok(())
    }

    pub async fn open_create_form(&self) {
        self.state.lock().await.show_create_form = true;
    }

    /// Hides the form. Entered values are kept for the next time it opens.
    pub async fn close_create_form(&self) {
        self.state.lock().await.show_create_form = false;
    }

    pub async fn edit_form(&self, edit: impl FnOnce(&mut AssignmentForm)) {
        edit(&mut self.state.lock().await.form);
    }

    /// Submits `form` as a new assignment.
    ///
    /// The form replaces the current form state first, so on any failure the
    /// entered values stay available for a retry and the form stays open. On
    /// success the form is cleared and closed once the selected employee's
    /// assignments have been fetched again.
    pub async fn submit_new_assignment(
        &self,
        form: AssignmentForm,
    ) -> Result<Assignment, DashboardError> {
        let request = {
            let mut state = self.state.lock().await;
            state.form = form;
            state.form.to_request()
        }
        .map_err(|err| {
            error!(operation = %Operation::SubmitAssignment, error = %err, "rejected assignment form");
            err
        })?;

        let created = {
            let _busy = AssigningGuard::raise(&self.assigning);
            self.store.assign_work(&request).await
        };
        let created = created.map_err(|err| log_failure(Operation::SubmitAssignment, err))?;
        info!(
            assignment_id = %created.id,
            employee_name = %request.employee_name,
            "assignment created"
        );

        self.refresh_selected()
            .await
            .map_err(|err| log_failure(Operation::SubmitAssignment, err))?;

        let mut state = self.state.lock().await;
        state.show_create_form = false;
        state.form.clear();
        Ok(created)
    }

    /// Submits whatever the form currently holds.
    pub async fn submit_current_form(&self) -> Result<Assignment, DashboardError> {
        let form = self.state.lock().await.form.clone();
        self.submit_new_assignment(form).await
    }

    /// Any status may follow any other, including reopening a completed
    /// assignment.
    pub async fn update_assignment_status(
        &self,
        assignment_id: &AssignmentId,
        status: AssignmentStatus,
    ) -> Result<(), DashboardError> {
        let updated = self
            .store
            .update_assignment_status(assignment_id, status)
            .await
            .map_err(|err| log_failure(Operation::UpdateStatus, err))?;
        info!(assignment_id = %updated.id, status = %updated.status, "assignment status updated");

        self.refresh_selected()
            .await
            .map_err(|err| log_failure(Operation::UpdateStatus, err))
    }

    pub async fn completion_summaries(&self) -> Vec<CompletionSummary> {
        let state = self.state.lock().await;
        let dropped = unattributed_count(&state.employees, &state.assignments);
        if dropped > 0 {
            warn!(
                count = dropped,
                "assignments reference unknown employees and are left out of completion summaries"
            );
        }
        compute_completion_summaries(&state.employees, &state.assignments)
    }

    async fn refresh_selected(&self) -> Result<()> {
        let Some(employee_id) = self.selected_employee().await else {
            debug!("no employee selected; skipping assignment refresh");
            return Ok(());
        };
        let assignments = self.store.fetch_employee_assignments(&employee_id).await?;
        self.state.lock().await.assignments = assignments;
        Ok(())
    }
}

fn log_failure(operation: Operation, err: anyhow::Error) -> DashboardError {
    error!(%operation, error = %format!("{err:#}"), "dashboard operation failed");
    DashboardError::failed(operation, err)
}

#[cfg(test)]
#[path = "tests/dashboard_tests.rs"]
mod tests;
