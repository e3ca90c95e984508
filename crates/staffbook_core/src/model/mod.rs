//! Employee domain model.
//!
//! # Responsibility
//! - Define the canonical employee record and its enumerated attributes.
//! - Define the untyped form draft consumed by validation.
//! - Provide input normalization helpers used while a draft is edited.
//!
//! # Invariants
//! - Every stored record is identified by a stable `EmployeeId`.
//! - Wire format uses camelCase keys and `YYYY-MM-DD` dates.

pub mod employee;
pub mod input;
