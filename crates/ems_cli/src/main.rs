//! Offline inspection tool for an EMS database file.
//!
//! # Responsibility
//! - Print store contents and analytics as JSON without running the server.
//! - Keep output deterministic for quick local sanity checks.

use clap::{Parser, Subcommand};
use ems_core::db::open_db;
use ems_core::{
    AnalyticsService, DepartmentService, EmployeeService, SqliteDepartmentRepository,
    SqliteEmployeeRepository,
};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "ems", version, about = "Inspect an employee management database")]
struct Cli {
    /// SQLite database file.
    #[arg(long, env = "EMS_DB_PATH", default_value = "ems.db")]
    db_path: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List departments with headcount.
    Departments,
    /// List employees with their department name.
    Employees,
    /// Per-department highest-paid employee and average salary.
    Analytics {
        /// Restrict output to one department.
        #[arg(long)]
        department_id: Option<i64>,
    },
    /// Company-wide payroll totals.
    Summary,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("ems: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, Box<dyn Error>> {
    let conn = open_db(&cli.db_path)?;
    let departments = SqliteDepartmentRepository::try_new(&conn)?;
    let employees = SqliteEmployeeRepository::try_new(&conn)?;

    let value = match cli.command {
        Command::Departments => serde_json::to_value(
            DepartmentService::new(departments, employees).list_departments()?,
        )?,
        Command::Employees => serde_json::to_value(
            EmployeeService::new(departments, employees).list_employees()?,
        )?,
        Command::Analytics { department_id } => serde_json::to_value(
            AnalyticsService::new(departments, employees).department_analytics(department_id)?,
        )?,
        Command::Summary => serde_json::to_value(
            AnalyticsService::new(departments, employees).payroll_summary()?,
        )?,
    };

    Ok(serde_json::to_string_pretty(&value)?)
}
