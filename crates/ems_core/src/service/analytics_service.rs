//! Analytics use-case service.
//!
//! Loads the current store contents and hands them to the pure aggregator.
//! Nothing is cached; every call reads the store again.

use super::{ServiceError, ServiceResult};
use crate::analytics::{department_analytics, payroll_summary, DepartmentAnalytics, PayrollSummary};
use crate::model::department::DepartmentId;
use crate::repo::department_repo::DepartmentRepository;
use crate::repo::employee_repo::EmployeeRepository;

/// Analytics service facade over repository implementations.
pub struct AnalyticsService<D: DepartmentRepository, E: EmployeeRepository> {
    departments: D,
    employees: E,
}

impl<D: DepartmentRepository, E: EmployeeRepository> AnalyticsService<D, E> {
    pub fn new(departments: D, employees: E) -> Self {
        Self {
            departments,
            employees,
        }
    }

    /// Computes per-department analytics, optionally for one department.
    ///
    /// With a filter, the result holds at most one entry and is empty when
    /// the department has no employees.
    ///
    /// # Errors
    /// - `ServiceError::DepartmentNotFound` when the filter names an unknown
    ///   department.
    pub fn department_analytics(
        &self,
        department_id: Option<DepartmentId>,
    ) -> ServiceResult<Vec<DepartmentAnalytics>> {
        match department_id {
            Some(id) => {
                let department = self
                    .departments
                    .get_department(id)?
                    .ok_or(ServiceError::DepartmentNotFound(id))?;
                let employees = self.employees.list_employees_by_department(id)?;
                Ok(department_analytics(&[department], &employees))
            }
            None => {
                let departments = self.departments.list_departments()?;
                let employees = self.employees.list_employees()?;
                Ok(department_analytics(&departments, &employees))
            }
        }
    }

    /// Computes company-wide payroll totals.
    pub fn payroll_summary(&self) -> ServiceResult<PayrollSummary> {
        let departments = self.departments.list_departments()?;
        let employees = self.employees.list_employees()?;
        Ok(payroll_summary(&departments, &employees))
    }
}
