//! Form validation for employee drafts.
//!
//! # Responsibility
//! - Check a draft before it may reach store write operations.
//! - Report failures as a field to code map the UI can translate.
//!
//! # Invariants
//! - Validation never mutates the store; it only uses `EmployeeLookup`.
//! - All rules run; failures accumulate instead of short-circuiting.

pub mod employee_validator;
