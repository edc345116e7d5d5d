//! Core domain logic for the employee management service.
//! This crate is the single source of truth for business invariants.

pub mod analytics;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use analytics::{DepartmentAnalytics, PayrollSummary};
pub use logging::{default_log_level, init_logging, init_stderr_logging, logging_status, LogTarget};
pub use model::department::{Department, DepartmentId, NewDepartment};
pub use model::employee::{Employee, EmployeeId, NewEmployee};
pub use model::ValidationError;
pub use repo::department_repo::{DepartmentRepository, SqliteDepartmentRepository};
pub use repo::employee_repo::{EmployeeRepository, SqliteEmployeeRepository};
pub use repo::{RepoError, RepoResult};
pub use service::analytics_service::AnalyticsService;
pub use service::department_service::{DepartmentRecord, DepartmentService};
pub use service::employee_service::{EmployeeRecord, EmployeeService, UNKNOWN_DEPARTMENT};
pub use service::{ServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
