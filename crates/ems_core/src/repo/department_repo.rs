//! Department repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist departments and look them up by id.
//!
//! # Invariants
//! - `create_department` assigns the id and makes the row visible in one
//!   `INSERT` statement.
//! - `list_departments` returns rows in insertion order.

use super::{ensure_connection_ready, RepoResult};
use crate::model::department::{Department, DepartmentId, NewDepartment};
use log::info;
use rusqlite::{params, Connection, OptionalExtension, Row};

const DEPARTMENT_SELECT_SQL: &str = "SELECT id, name FROM departments";

/// Repository interface for department persistence.
pub trait DepartmentRepository {
    /// Validates and stores one department, returning the stored record.
    fn create_department(&self, input: &NewDepartment) -> RepoResult<Department>;
    /// Gets one department by id.
    fn get_department(&self, id: DepartmentId) -> RepoResult<Option<Department>>;
    /// Lists all departments in insertion order.
    fn list_departments(&self) -> RepoResult<Vec<Department>>;
}

/// SQLite-backed department repository.
pub struct SqliteDepartmentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDepartmentRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, &["departments"])?;
        Ok(Self { conn })
    }
}

impl DepartmentRepository for SqliteDepartmentRepository<'_> {
    fn create_department(&self, input: &NewDepartment) -> RepoResult<Department> {
        let input = input.validated()?;

        self.conn.execute(
            "INSERT INTO departments (name) VALUES (?1);",
            params![input.name.as_str()],
        )?;
        let id = self.conn.last_insert_rowid();
        info!("event=department_create module=repo status=ok department_id={id}");

        Ok(Department {
            id,
            name: input.name,
        })
    }

    fn get_department(&self, id: DepartmentId) -> RepoResult<Option<Department>> {
        let department = self
            .conn
            .query_row(
                &format!("{DEPARTMENT_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_department_row,
            )
            .optional()?;
        Ok(department)
    }

    fn list_departments(&self) -> RepoResult<Vec<Department>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DEPARTMENT_SELECT_SQL} ORDER BY id ASC;"))?;
        let departments = stmt
            .query_map([], parse_department_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(departments)
    }
}

fn parse_department_row(row: &Row<'_>) -> rusqlite::Result<Department> {
    Ok(Department {
        id: row.get("id")?,
        name: row.get("name")?,
    })
}
