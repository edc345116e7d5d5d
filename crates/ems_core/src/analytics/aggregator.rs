use crate::model::department::{Department, DepartmentId};
use crate::model::employee::Employee;
use serde::Serialize;
use std::collections::HashMap;

/// Salary summary for one department with at least one employee.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentAnalytics {
    pub department_id: DepartmentId,
    /// Department display name.
    pub department: String,
    /// Name of the first employee (in input order) holding the maximum salary.
    pub highest_paid_employee: String,
    pub highest_salary: f64,
    /// Arithmetic mean of salaries, real division.
    pub average_salary: f64,
    pub employee_count: usize,
    pub total_payroll: f64,
}

/// Company-wide payroll totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayrollSummary {
    pub total_employees: usize,
    pub total_departments: usize,
    pub total_payroll: f64,
    /// `0.0` when there are no employees.
    pub overall_average_salary: f64,
    /// Department with the strictly highest average salary; the first one in
    /// department order wins ties. `None` when no department has employees.
    pub top_average_department: Option<String>,
}

struct Accumulator<'a> {
    top: &'a Employee,
    total: f64,
    mean: RunningMean,
}

/// Incremental mean that stays finite for any finite inputs.
#[derive(Debug, Default, Clone, Copy)]
struct RunningMean {
    value: f64,
    count: usize,
}

impl RunningMean {
    fn push(&mut self, sample: f64) {
        self.count += 1;
        self.value += (sample - self.value) / self.count as f64;
    }
}

impl<'a> Accumulator<'a> {
    fn new(first: &'a Employee) -> Self {
        let mut mean = RunningMean::default();
        mean.push(first.salary);
        Self {
            top: first,
            total: first.salary,
            mean,
        }
    }

    fn push(&mut self, employee: &'a Employee) {
        // Strict comparison keeps the earliest maximum.
        if employee.salary > self.top.salary {
            self.top = employee;
        }
        self.total += employee.salary;
        self.mean.push(employee.salary);
    }
}

/// Computes one entry per department that has at least one employee.
///
/// Entries follow `departments` order. Employees referencing a department
/// absent from `departments` are ignored.
pub fn department_analytics(
    departments: &[Department],
    employees: &[Employee],
) -> Vec<DepartmentAnalytics> {
    let mut by_department: HashMap<DepartmentId, Accumulator<'_>> = HashMap::new();
    for employee in employees {
        by_department
            .entry(employee.department_id)
            .and_modify(|acc| acc.push(employee))
            .or_insert_with(|| Accumulator::new(employee));
    }

    departments
        .iter()
        .filter_map(|department| {
            let acc = by_department.get(&department.id)?;
            Some(DepartmentAnalytics {
                department_id: department.id,
                department: department.name.clone(),
                highest_paid_employee: acc.top.name.clone(),
                highest_salary: acc.top.salary,
                average_salary: acc.mean.value,
                employee_count: acc.mean.count,
                total_payroll: acc.total,
            })
        })
        .collect()
}

/// Computes company-wide totals over every employee.
pub fn payroll_summary(departments: &[Department], employees: &[Employee]) -> PayrollSummary {
    let mut overall = RunningMean::default();
    let mut total_payroll = 0.0;
    for employee in employees {
        overall.push(employee.salary);
        total_payroll += employee.salary;
    }

    let mut top: Option<&DepartmentAnalytics> = None;
    let entries = department_analytics(departments, employees);
    for entry in &entries {
        match top {
            Some(current) if entry.average_salary <= current.average_salary => {}
            _ => top = Some(entry),
        }
    }

    PayrollSummary {
        total_employees: employees.len(),
        total_departments: departments.len(),
        total_payroll,
        overall_average_salary: overall.value,
        top_average_department: top.map(|entry| entry.department.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::{department_analytics, payroll_summary};
    use crate::model::department::Department;
    use crate::model::employee::Employee;

    fn department(id: i64, name: &str) -> Department {
        Department {
            id,
            name: name.to_string(),
        }
    }

    fn employee(id: i64, name: &str, salary: f64, department_id: i64) -> Employee {
        Employee {
            id,
            name: name.to_string(),
            salary,
            department_id,
        }
    }

    #[test]
    fn highest_paid_and_average_for_one_department() {
        let departments = [department(1, "Eng")];
        let employees = [employee(1, "A", 100.0, 1), employee(2, "B", 200.0, 1)];

        let entries = department_analytics(&departments, &employees);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].department, "Eng");
        assert_eq!(entries[0].highest_paid_employee, "B");
        assert_eq!(entries[0].average_salary, 150.0);
        assert_eq!(entries[0].employee_count, 2);
    }

    #[test]
    fn equal_salaries_pick_first_in_input_order() {
        let departments = [department(1, "Eng")];
        let employees = [
            employee(1, "A", 100.0, 1),
            employee(2, "B", 100.0, 1),
            employee(3, "C", 100.0, 1),
        ];

        for _ in 0..10 {
            let entries = department_analytics(&departments, &employees);
            assert_eq!(entries[0].highest_paid_employee, "A");
        }
    }

    #[test]
    fn average_uses_real_division() {
        let departments = [department(1, "Eng")];
        let employees = [
            employee(1, "A", 100.0, 1),
            employee(2, "B", 100.0, 1),
            employee(3, "C", 101.0, 1),
        ];

        let entries = department_analytics(&departments, &employees);
        assert!((entries[0].average_salary - 301.0 / 3.0).abs() < 1e-9);
        assert!(entries[0].average_salary > 100.3);
    }

    #[test]
    fn empty_departments_and_orphans_produce_no_entry() {
        let departments = [department(1, "Eng"), department(2, "Sales")];
        let employees = [employee(1, "A", 50.0, 2), employee(2, "Ghost", 999.0, 42)];

        let entries = department_analytics(&departments, &employees);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].department, "Sales");
        assert_eq!(entries[0].highest_paid_employee, "A");
    }

    #[test]
    fn entries_follow_department_order_not_employee_order() {
        let departments = [department(1, "Eng"), department(2, "Sales")];
        let employees = [employee(1, "S", 10.0, 2), employee(2, "E", 20.0, 1)];

        let names: Vec<_> = department_analytics(&departments, &employees)
            .into_iter()
            .map(|entry| entry.department)
            .collect();
        assert_eq!(names, ["Eng", "Sales"]);
    }

    #[test]
    fn summary_of_empty_store_is_zeroed() {
        let summary = payroll_summary(&[department(1, "Eng")], &[]);
        assert_eq!(summary.total_employees, 0);
        assert_eq!(summary.total_departments, 1);
        assert_eq!(summary.total_payroll, 0.0);
        assert_eq!(summary.overall_average_salary, 0.0);
        assert_eq!(summary.top_average_department, None);
    }

    #[test]
    fn summary_top_average_prefers_first_on_ties() {
        let departments = [department(1, "Eng"), department(2, "Sales"), department(3, "HR")];
        let employees = [
            employee(1, "A", 300.0, 1),
            employee(2, "B", 300.0, 2),
            employee(3, "C", 100.0, 3),
        ];

        let summary = payroll_summary(&departments, &employees);
        assert_eq!(summary.total_employees, 3);
        assert_eq!(summary.total_payroll, 700.0);
        assert!((summary.overall_average_salary - 700.0 / 3.0).abs() < 1e-9);
        assert_eq!(summary.top_average_department.as_deref(), Some("Eng"));
    }

    #[test]
    fn averages_stay_finite_near_f64_max() {
        let departments = [department(1, "Eng")];
        let employees = [employee(1, "A", 1.0e308, 1), employee(2, "B", 1.0e308, 1)];

        let entries = department_analytics(&departments, &employees);
        assert_eq!(entries[0].average_salary, 1.0e308);
        assert_eq!(entries[0].highest_paid_employee, "A");

        let summary = payroll_summary(&departments, &employees);
        assert_eq!(summary.overall_average_salary, 1.0e308);
    }
}
