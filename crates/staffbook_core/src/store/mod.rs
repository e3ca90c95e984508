//! Record store: the single owner of the employee collection.
//!
//! # Responsibility
//! - Mediate every read and write of the collection.
//! - Enforce id, email and phone uniqueness.
//! - Persist the whole collection on every mutation and notify subscribers.
//!
//! # Invariants
//! - Business rejections are return values (`None`/`false`), never errors.
//! - Persistence failures are logged and never abort an in-memory mutation.

pub mod employee_store;
pub mod seed;
pub mod subscribers;
