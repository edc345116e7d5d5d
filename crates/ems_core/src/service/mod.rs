//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Join employees against departments in application code.
//! - Keep the HTTP and CLI layers decoupled from storage details.

use crate::model::department::DepartmentId;
use crate::model::ValidationError;
use crate::repo::RepoError;
use thiserror::Error;

pub mod analytics_service;
pub mod department_service;
pub mod employee_service;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error shared by department, employee and analytics use-cases.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input failed field validation.
    #[error("{0}")]
    Validation(ValidationError),
    /// Referenced department does not exist.
    #[error("department not found: {0}")]
    DepartmentNotFound(DepartmentId),
    /// Internal consistency mismatch between write and read-back.
    #[error("inconsistent store state: {0}")]
    InconsistentState(&'static str),
    /// Persistence-layer failure.
    #[error("{0}")]
    Repo(RepoError),
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            RepoError::UnknownDepartment(id) => Self::DepartmentNotFound(id),
            other => Self::Repo(other),
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}
