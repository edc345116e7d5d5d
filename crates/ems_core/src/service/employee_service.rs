//! Employee use-case service.
//!
//! # Responsibility
//! - Create employees under an existing department.
//! - List employees joined with their department name.
//!
//! # Invariants
//! - Creation with an unknown `department_id` is rejected, never stored.
//! - Creation never lets the summed payroll leave the finite `f64` range.
//! - Listing never fails on an unresolvable department; the name is
//!   reported as [`UNKNOWN_DEPARTMENT`].

use super::{ServiceError, ServiceResult};
use crate::model::department::DepartmentId;
use crate::model::employee::{Employee, EmployeeId, NewEmployee};
use crate::model::ValidationError;
use crate::repo::department_repo::DepartmentRepository;
use crate::repo::employee_repo::EmployeeRepository;
use log::warn;
use serde::Serialize;
use std::collections::HashMap;

/// Department label used when an employee's department cannot be resolved.
pub const UNKNOWN_DEPARTMENT: &str = "unknown";

/// Employee read model joined with its department name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeRecord {
    pub id: EmployeeId,
    pub name: String,
    pub salary: f64,
    pub department: String,
}

/// Employee service facade over repository implementations.
pub struct EmployeeService<D: DepartmentRepository, E: EmployeeRepository> {
    departments: D,
    employees: E,
}

impl<D: DepartmentRepository, E: EmployeeRepository> EmployeeService<D, E> {
    pub fn new(departments: D, employees: E) -> Self {
        Self {
            departments,
            employees,
        }
    }

    /// Creates one employee after checking that its department exists.
    ///
    /// # Errors
    /// - `ServiceError::Validation` for blank names or invalid salaries.
    /// - `ServiceError::DepartmentNotFound` for an unknown `department_id`.
    /// - `ServiceError::Validation` when the salary would overflow total payroll.
    pub fn add_employee(&self, input: &NewEmployee) -> ServiceResult<Employee> {
        let input = input.validated()?;
        if self.departments.get_department(input.department_id)?.is_none() {
            return Err(ServiceError::DepartmentNotFound(input.department_id));
        }
        if !(self.employees.total_payroll()? + input.salary).is_finite() {
            return Err(ValidationError::PayrollOverflow(input.salary).into());
        }

        let created = self.employees.create_employee(&input)?;
        self.employees
            .get_employee(created.id)?
            .ok_or(ServiceError::InconsistentState(
                "created employee not found in read-back",
            ))
    }

    /// Lists every employee in insertion order with its department name.
    pub fn list_employees(&self) -> ServiceResult<Vec<EmployeeRecord>> {
        let names: HashMap<DepartmentId, String> = self
            .departments
            .list_departments()?
            .into_iter()
            .map(|department| (department.id, department.name))
            .collect();

        Ok(self
            .employees
            .list_employees()?
            .into_iter()
            .map(|employee| {
                let department = match names.get(&employee.department_id) {
                    Some(name) => name.clone(),
                    None => {
                        warn!(
                            "event=employee_list module=service status=degraded error_code=unknown_department employee_id={} department_id={}",
                            employee.id, employee.department_id
                        );
                        UNKNOWN_DEPARTMENT.to_string()
                    }
                };
                EmployeeRecord {
                    id: employee.id,
                    name: employee.name,
                    salary: employee.salary,
                    department,
                }
            })
            .collect())
    }
}
