//! Department use-case service.
//!
//! # Responsibility
//! - Create departments and expose them with their headcount.
//!
//! # Invariants
//! - Headcounts are derived from the employee store on every call.

use super::{ServiceError, ServiceResult};
use crate::model::department::{Department, DepartmentId, NewDepartment};
use crate::repo::department_repo::DepartmentRepository;
use crate::repo::employee_repo::EmployeeRepository;
use serde::Serialize;
use std::collections::HashMap;

/// Department read model with its current headcount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentRecord {
    pub id: DepartmentId,
    pub name: String,
    pub employee_count: usize,
}

impl DepartmentRecord {
    fn new(department: Department, employee_count: usize) -> Self {
        Self {
            id: department.id,
            name: department.name,
            employee_count,
        }
    }
}

/// Department service facade over repository implementations.
pub struct DepartmentService<D: DepartmentRepository, E: EmployeeRepository> {
    departments: D,
    employees: E,
}

impl<D: DepartmentRepository, E: EmployeeRepository> DepartmentService<D, E> {
    pub fn new(departments: D, employees: E) -> Self {
        Self {
            departments,
            employees,
        }
    }

    /// Creates one department and returns the stored record.
    pub fn add_department(&self, name: impl Into<String>) -> ServiceResult<Department> {
        let created = self
            .departments
            .create_department(&NewDepartment::new(name))?;
        self.departments
            .get_department(created.id)?
            .ok_or(ServiceError::InconsistentState(
                "created department not found in read-back",
            ))
    }

    /// Gets one department with its headcount.
    pub fn get_department(&self, id: DepartmentId) -> ServiceResult<DepartmentRecord> {
        let department = self
            .departments
            .get_department(id)?
            .ok_or(ServiceError::DepartmentNotFound(id))?;
        let employee_count = self.employees.list_employees_by_department(id)?.len();
        Ok(DepartmentRecord::new(department, employee_count))
    }

    /// Lists every department in insertion order with its headcount.
    pub fn list_departments(&self) -> ServiceResult<Vec<DepartmentRecord>> {
        let mut counts: HashMap<DepartmentId, usize> = HashMap::new();
        for employee in self.employees.list_employees()? {
            *counts.entry(employee.department_id).or_default() += 1;
        }

        Ok(self
            .departments
            .list_departments()?
            .into_iter()
            .map(|department| {
                let count = counts.get(&department.id).copied().unwrap_or(0);
                DepartmentRecord::new(department, count)
            })
            .collect())
    }
}
