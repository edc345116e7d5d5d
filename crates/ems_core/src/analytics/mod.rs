//! Salary analytics over in-memory department and employee sets.
//!
//! # Responsibility
//! - Compute per-department highest-paid employee and average salary.
//! - Compute company-wide payroll totals.
//!
//! # Invariants
//! - Pure computation: no store access, no side effects.
//! - Departments with zero employees produce no per-department entry.
//! - Equal maximum salaries resolve to the first employee in input order.

mod aggregator;

pub use aggregator::{department_analytics, payroll_summary, DepartmentAnalytics, PayrollSummary};
