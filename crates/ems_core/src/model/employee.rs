//! Employee domain model.
//!
//! # Invariants
//! - `salary` is finite and non-negative.
//! - `department_id` referenced an existing department at creation time.

use super::department::DepartmentId;
use super::validation::{normalize_name, ValidationError};
use serde::{Deserialize, Serialize};

/// Store-assigned employee identifier.
pub type EmployeeId = i64;

/// Persisted person record belonging to exactly one department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub salary: f64,
    pub department_id: DepartmentId,
}

/// Input for creating an employee.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub name: String,
    pub salary: f64,
    pub department_id: DepartmentId,
}

impl NewEmployee {
    pub fn new(name: impl Into<String>, salary: f64, department_id: DepartmentId) -> Self {
        Self {
            name: name.into(),
            salary,
            department_id,
        }
    }

    /// Returns a copy with the name trimmed, or the first validation failure.
    ///
    /// Department existence is not checked here; see
    /// `EmployeeService::add_employee`.
    pub fn validated(&self) -> Result<Self, ValidationError> {
        let name = normalize_name("name", &self.name)?;
        if !self.salary.is_finite() {
            return Err(ValidationError::NonFiniteSalary);
        }
        if self.salary < 0.0 {
            return Err(ValidationError::NegativeSalary(self.salary));
        }

        Ok(Self {
            name,
            salary: self.salary,
            department_id: self.department_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::NewEmployee;
    use crate::model::ValidationError;

    #[test]
    fn zero_salary_is_allowed() {
        let input = NewEmployee::new("Intern", 0.0, 1);
        assert_eq!(input.validated().expect("zero salary should validate").salary, 0.0);
    }

    #[test]
    fn negative_salary_is_rejected() {
        let err = NewEmployee::new("A", -1.0, 1).validated().unwrap_err();
        assert!(matches!(err, ValidationError::NegativeSalary(value) if value == -1.0));
    }

    #[test]
    fn nan_and_infinite_salaries_are_rejected() {
        for salary in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = NewEmployee::new("A", salary, 1).validated().unwrap_err();
            assert_eq!(err, ValidationError::NonFiniteSalary);
        }
    }
}
