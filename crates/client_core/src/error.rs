use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Initialize,
    SelectEmployee,
    SubmitAssignment,
    UpdateStatus,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Initialize => "initialize_dashboard",
            Self::SelectEmployee => "select_employee",
            Self::SubmitAssignment => "submit_assignment",
            Self::UpdateStatus => "update_assignment_status",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failures are not classified further than "the operation failed"; the store's
/// message is carried along for the log.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("{operation} failed: {source:#}")]
    OperationFailed {
        operation: Operation,
        source: anyhow::Error,
    },
    #[error("assignment form is incomplete: missing {}", .missing.join(", "))]
    IncompleteForm { missing: Vec<&'static str> },
}

impl DashboardError {
    pub fn failed(operation: Operation, source: anyhow::Error) -> Self {
        Self::OperationFailed { operation, source }
    }
}
