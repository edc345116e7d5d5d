//! Domain model for departments and employees.
//!
//! # Responsibility
//! - Define the records persisted by the store and their creation inputs.
//! - Own field-level validation shared by every write path.
//!
//! # Invariants
//! - Identifiers are assigned by the store and never reused.
//! - Records are immutable after creation.

pub mod department;
pub mod employee;
pub mod validation;

pub use validation::{ValidationError, MAX_NAME_CHARS};
