//! Employee use-case service.
//!
//! # Responsibility
//! - Provide the create/update/delete/list entry points the UI calls.
//! - Run validation before any store write.
//! - Obtain confirmation before creating, overwriting or deleting records.
//!
//! # Invariants
//! - Service APIs never bypass store uniqueness checks.
//! - A declined confirmation leaves the store untouched.

use crate::model::employee::{DraftConversionError, Employee, EmployeeDraft, EmployeeId};
use crate::query::employee_list::{list_employees, EmployeeListQuery, EmployeePage};
use crate::service::confirmation::{ConfirmationRequest, Confirmer};
use crate::slot::DurableSlot;
use crate::store::employee_store::EmployeeStore;
use crate::validation::employee_validator::{validate_employee, ValidationReport};
use chrono::{Local, NaiveDate};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for employee use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeServiceError {
    /// Draft failed validation; nothing was written.
    Validation(ValidationReport),
    /// Target record does not exist.
    NotFound(EmployeeId),
    /// Store rejected the write on email/phone uniqueness.
    Conflict,
    /// User declined the confirmation prompt.
    Cancelled,
    /// Validated draft could not be converted to a typed record.
    Conversion(DraftConversionError),
}

impl Display for EmployeeServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(report) => write!(f, "validation failed: {report}"),
            Self::NotFound(id) => write!(f, "employee not found: {id}"),
            Self::Conflict => write!(f, "email address or phone number already in use"),
            Self::Cancelled => write!(f, "operation cancelled by user"),
            Self::Conversion(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EmployeeServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Conversion(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DraftConversionError> for EmployeeServiceError {
    fn from(value: DraftConversionError) -> Self {
        Self::Conversion(value)
    }
}

pub type ServiceResult<T> = Result<T, EmployeeServiceError>;

/// Clock used for the not-in-the-future date rule.
pub type Today = fn() -> NaiveDate;

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Employee service facade over an explicitly owned store.
pub struct EmployeeService<S: DurableSlot> {
    store: EmployeeStore<S>,
    today: Today,
}

impl<S: DurableSlot> EmployeeService<S> {
    /// Creates a service over `store` using the local date.
    pub fn new(store: EmployeeStore<S>) -> Self {
        Self::with_clock(store, local_today)
    }

    /// Creates a service with a fixed clock for date validation.
    pub fn with_clock(store: EmployeeStore<S>, today: Today) -> Self {
        Self { store, today }
    }

    pub fn store(&self) -> &EmployeeStore<S> {
        &self.store
    }

    /// Mutable store access for subscriptions.
    pub fn store_mut(&mut self) -> &mut EmployeeStore<S> {
        &mut self.store
    }

    pub fn into_store(self) -> EmployeeStore<S> {
        self.store
    }

    /// Validates a draft without writing anything.
    pub fn validate(&self, draft: &EmployeeDraft) -> ValidationReport {
        validate_employee(draft, &self.store, (self.today)())
    }

    /// Creates a record from a form draft after confirmation.
    ///
    /// Any `id` on the draft is ignored; the store assigns a fresh one.
    pub fn create(
        &mut self,
        draft: &EmployeeDraft,
        confirmer: &mut impl Confirmer,
    ) -> ServiceResult<Employee> {
        let draft = EmployeeDraft {
            id: None,
            ..draft.clone()
        };
        let data = self.checked(&draft)?.to_new_employee()?;

        if !confirmer.confirm(&ConfirmationRequest::Create) {
            info!("event=employee_add module=service status=cancelled");
            return Err(EmployeeServiceError::Cancelled);
        }

        self.store
            .add_employee(data)
            .ok_or(EmployeeServiceError::Conflict)
    }

    /// Replaces the record named by `draft.id` after confirmation.
    pub fn update(
        &mut self,
        draft: &EmployeeDraft,
        confirmer: &mut impl Confirmer,
    ) -> ServiceResult<Employee> {
        let id = draft.id.clone().unwrap_or_default();
        self.require_existing(&id)?;
        let data = self.checked(draft)?.to_new_employee()?;

        if !confirmer.confirm(&ConfirmationRequest::Update { id: id.clone() }) {
            info!("event=employee_update module=service status=cancelled id={id}");
            return Err(EmployeeServiceError::Cancelled);
        }

        let employee = data.with_id(id);
        if self.store.update_employee(employee.clone()) {
            Ok(employee)
        } else {
            Err(EmployeeServiceError::Conflict)
        }
    }

    /// Deletes one record after confirmation.
    pub fn delete(&mut self, id: &str, confirmer: &mut impl Confirmer) -> ServiceResult<()> {
        self.require_existing(id)?;
        if !confirmer.confirm(&ConfirmationRequest::Delete { id: id.to_string() }) {
            info!("event=employee_delete module=service status=cancelled id={id}");
            return Err(EmployeeServiceError::Cancelled);
        }

        if self.store.delete_employee(id) {
            Ok(())
        } else {
            Err(EmployeeServiceError::NotFound(id.to_string()))
        }
    }

    /// Deletes a selection of records after one confirmation.
    ///
    /// An empty selection returns `Ok(0)` without prompting.
    pub fn delete_selected(
        &mut self,
        ids: &[EmployeeId],
        confirmer: &mut impl Confirmer,
    ) -> ServiceResult<usize> {
        if ids.is_empty() {
            return Ok(0);
        }
        if !confirmer.confirm(&ConfirmationRequest::BulkDelete { count: ids.len() }) {
            info!(
                "event=employee_bulk_delete module=service status=cancelled requested={}",
                ids.len()
            );
            return Err(EmployeeServiceError::Cancelled);
        }
        Ok(self.store.delete_employees(ids))
    }

    /// Lists one page of records matching the query.
    pub fn list(&self, query: &EmployeeListQuery) -> EmployeePage {
        list_employees(self.store.employees(), query)
    }

    pub fn get(&self, id: &str) -> Option<&Employee> {
        self.store.get_employee_by_id(id)
    }

    /// Loads an edit-form draft for an existing record.
    pub fn draft_for(&self, id: &str) -> ServiceResult<EmployeeDraft> {
        self.store
            .get_employee_by_id(id)
            .map(EmployeeDraft::from)
            .ok_or_else(|| EmployeeServiceError::NotFound(id.to_string()))
    }

    fn require_existing(&self, id: &str) -> ServiceResult<()> {
        if self.store.get_employee_by_id(id).is_some() {
            Ok(())
        } else {
            Err(EmployeeServiceError::NotFound(id.to_string()))
        }
    }

    fn checked<'d>(&self, draft: &'d EmployeeDraft) -> ServiceResult<&'d EmployeeDraft> {
        let report = self.validate(draft);
        if report.is_valid() {
            Ok(draft)
        } else {
            info!(
                "event=employee_validate module=service status=rejected fields={}",
                report.len()
            );
            Err(EmployeeServiceError::Validation(report))
        }
    }
}
