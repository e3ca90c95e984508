//! Search and pagination over collection snapshots.
//!
//! # Responsibility
//! - Project a snapshot into the page the list view renders.
//!
//! # Invariants
//! - Pages are 1-based; a page past the end clamps to the last page.
//! - Filtering never reorders records.

pub mod employee_list;
