//! Client-side employee record core.
//! This crate is the single source of truth for record identity, uniqueness
//! and change propagation; views only call its entry points.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod query;
pub mod service;
pub mod slot;
pub mod store;
pub mod validation;

pub use config::{ConfigError, StoreConfig, DEFAULT_SLOT_KEY};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::employee::{
    parse_date, Department, DraftConversionError, Employee, EmployeeDraft, EmployeeId,
    NewEmployee, Position,
};
pub use model::input::{format_phone_input, normalize_date_input};
pub use query::employee_list::{list_employees, EmployeeListQuery, EmployeePage};
pub use service::confirmation::{AutoConfirm, ConfirmationRequest, Confirmer};
pub use service::employee_service::{EmployeeService, EmployeeServiceError, ServiceResult};
pub use slot::{DurableSlot, MemorySlot, SlotError, SlotResult, SqliteSlot};
pub use store::employee_store::{EmployeeLookup, EmployeeStore};
pub use store::seed::seed_employees;
pub use store::subscribers::Subscription;
pub use validation::employee_validator::{
    validate_employee, validate_employee_now, EmployeeField, ValidationCode, ValidationReport,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
