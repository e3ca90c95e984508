//! Two-phase confirmation contract with the UI.
//!
//! The service asks a `Confirmer` first and only then runs the synchronous
//! store mutation. The store itself never waits on the UI.

use crate::model::employee::EmployeeId;

/// Destructive or overwriting action awaiting user approval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationRequest {
    /// Submission of a new record from the add form.
    Create,
    Update { id: EmployeeId },
    Delete { id: EmployeeId },
    BulkDelete { count: usize },
}

impl ConfirmationRequest {
    /// Translation key of the dialog title.
    pub fn title_key(&self) -> &'static str {
        match self {
            Self::Create => "confirmSubmission",
            Self::Update { .. } => "confirmUpdateTitle",
            Self::Delete { .. } | Self::BulkDelete { .. } => "confirmDeleteTitle",
        }
    }

    /// Translation key of the dialog message.
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::Create => "confirmSubmissionMessage",
            Self::Update { .. } => "confirmUpdateMessage",
            Self::Delete { .. } => "confirmDeleteMessage",
            Self::BulkDelete { .. } => "confirmBulkDeleteMessage",
        }
    }
}

/// UI collaborator that answers confirmation prompts.
pub trait Confirmer {
    fn confirm(&mut self, request: &ConfirmationRequest) -> bool;
}

impl<F> Confirmer for F
where
    F: FnMut(&ConfirmationRequest) -> bool,
{
    fn confirm(&mut self, request: &ConfirmationRequest) -> bool {
        self(request)
    }
}

/// Confirmer that approves everything, for non-interactive callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

impl Confirmer for AutoConfirm {
    fn confirm(&mut self, _request: &ConfirmationRequest) -> bool {
        true
    }
}
