//! Employee repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist employees and list them globally or per department.
//!
//! # Invariants
//! - A foreign-key violation on insert is reported as
//!   `RepoError::UnknownDepartment`, never as a raw SQLite error.
//! - Persisted salaries are finite and non-negative; rows violating this are
//!   rejected on read as `RepoError::InvalidData`.
//! - List queries return rows in insertion order.

use super::{ensure_connection_ready, RepoError, RepoResult};
use crate::model::department::DepartmentId;
use crate::model::employee::{Employee, EmployeeId, NewEmployee};
use log::{info, warn};
use rusqlite::{params, Connection, OptionalExtension, Row};

const EMPLOYEE_SELECT_SQL: &str = "SELECT id, name, salary, department_id FROM employees";

/// Repository interface for employee persistence.
pub trait EmployeeRepository {
    /// Validates and stores one employee, returning the stored record.
    fn create_employee(&self, input: &NewEmployee) -> RepoResult<Employee>;
    /// Gets one employee by id.
    fn get_employee(&self, id: EmployeeId) -> RepoResult<Option<Employee>>;
    /// Lists all employees in insertion order.
    fn list_employees(&self) -> RepoResult<Vec<Employee>>;
    /// Lists employees of one department in insertion order.
    fn list_employees_by_department(&self, id: DepartmentId) -> RepoResult<Vec<Employee>>;
    /// Sum of all stored salaries; `0.0` when empty.
    fn total_payroll(&self) -> RepoResult<f64>;
}

/// SQLite-backed employee repository.
pub struct SqliteEmployeeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEmployeeRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, &["departments", "employees"])?;
        Ok(Self { conn })
    }
}

impl EmployeeRepository for SqliteEmployeeRepository<'_> {
    fn create_employee(&self, input: &NewEmployee) -> RepoResult<Employee> {
        let input = input.validated()?;

        let result = self.conn.execute(
            "INSERT INTO employees (name, salary, department_id) VALUES (?1, ?2, ?3);",
            params![input.name.as_str(), input.salary, input.department_id],
        );
        if let Err(err) = result {
            if is_foreign_key_violation(&err) {
                warn!(
                    "event=employee_create module=repo status=error error_code=unknown_department department_id={}",
                    input.department_id
                );
                return Err(RepoError::UnknownDepartment(input.department_id));
            }
            return Err(err.into());
        }

        let id = self.conn.last_insert_rowid();
        info!(
            "event=employee_create module=repo status=ok employee_id={id} department_id={}",
            input.department_id
        );

        Ok(Employee {
            id,
            name: input.name,
            salary: input.salary,
            department_id: input.department_id,
        })
    }

    fn get_employee(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        let row = self
            .conn
            .query_row(
                &format!("{EMPLOYEE_SELECT_SQL} WHERE id = ?1;"),
                [id],
                read_employee_row,
            )
            .optional()?;
        row.map(check_employee).transpose()
    }

    fn list_employees(&self) -> RepoResult<Vec<Employee>> {
        self.query_employees(&format!("{EMPLOYEE_SELECT_SQL} ORDER BY id ASC;"), None)
    }

    fn list_employees_by_department(&self, id: DepartmentId) -> RepoResult<Vec<Employee>> {
        self.query_employees(
            &format!("{EMPLOYEE_SELECT_SQL} WHERE department_id = ?1 ORDER BY id ASC;"),
            Some(id),
        )
    }

    fn total_payroll(&self) -> RepoResult<f64> {
        let total = self
            .conn
            .query_row("SELECT TOTAL(salary) FROM employees;", [], |row| {
                row.get::<_, f64>(0)
            })?;
        Ok(total)
    }
}

impl SqliteEmployeeRepository<'_> {
    fn query_employees(
        &self,
        sql: &str,
        department_id: Option<DepartmentId>,
    ) -> RepoResult<Vec<Employee>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = match department_id {
            Some(id) => stmt.query([id])?,
            None => stmt.query([])?,
        };

        let mut employees = Vec::new();
        while let Some(row) = rows.next()? {
            employees.push(check_employee(read_employee_row(row)?)?);
        }
        Ok(employees)
    }
}

fn read_employee_row(row: &Row<'_>) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: row.get("id")?,
        name: row.get("name")?,
        salary: row.get("salary")?,
        department_id: row.get("department_id")?,
    })
}

fn check_employee(employee: Employee) -> RepoResult<Employee> {
    if !employee.salary.is_finite() || employee.salary < 0.0 {
        return Err(RepoError::InvalidData(format!(
            "invalid salary `{}` in employees.salary for id {}",
            employee.salary, employee.id
        )));
    }
    Ok(employee)
}

fn is_foreign_key_violation(err: &rusqlite::Error) -> bool {
    err.sqlite_error()
        .is_some_and(|inner| inner.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY)
}
