//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation, confirmation and store writes into use-case APIs.
//! - Keep UI layers decoupled from storage details.

pub mod confirmation;
pub mod employee_service;
