use ems_core::db::migrations::latest_version;
use ems_core::db::open_db_in_memory;
use ems_core::{
    DepartmentRepository, EmployeeRepository, NewDepartment, NewEmployee, RepoError,
    SqliteDepartmentRepository, SqliteEmployeeRepository, ValidationError,
};
use rusqlite::Connection;

#[test]
fn create_and_get_department_roundtrip() {
    let conn = open_db_in_memory().expect("in-memory db should open");
    let repo = SqliteDepartmentRepository::try_new(&conn).expect("repo should accept migrated db");

    let created = repo
        .create_department(&NewDepartment::new("  Engineering  "))
        .expect("department insert should succeed");
    assert_eq!(created.name, "Engineering");

    let loaded = repo
        .get_department(created.id)
        .expect("department lookup should succeed")
        .expect("record should exist");
    assert_eq!(loaded, created);
}

#[test]
fn department_ids_are_fresh_and_list_keeps_insertion_order() {
    let conn = open_db_in_memory().expect("in-memory db should open");
    let repo = SqliteDepartmentRepository::try_new(&conn).expect("repo should accept migrated db");

    let eng = repo
        .create_department(&NewDepartment::new("Eng"))
        .expect("department insert should succeed");
    let sales = repo
        .create_department(&NewDepartment::new("Sales"))
        .expect("department insert should succeed");
    let hr = repo
        .create_department(&NewDepartment::new("HR"))
        .expect("department insert should succeed");
    assert!(eng.id < sales.id && sales.id < hr.id);

    let names: Vec<_> = repo
        .list_departments()
        .expect("departments should list")
        .into_iter()
        .map(|department| department.name)
        .collect();
    assert_eq!(names, ["Eng", "Sales", "HR"]);
}

#[test]
fn get_missing_department_returns_none() {
    let conn = open_db_in_memory().expect("in-memory db should open");
    let repo = SqliteDepartmentRepository::try_new(&conn).expect("repo should accept migrated db");

    assert!(repo.get_department(404).expect("department lookup should succeed").is_none());
}

#[test]
fn blank_department_name_is_rejected_before_insert() {
    let conn = open_db_in_memory().expect("in-memory db should open");
    let repo = SqliteDepartmentRepository::try_new(&conn).expect("repo should accept migrated db");

    let err = repo.create_department(&NewDepartment::new(" ")).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::EmptyField("name"))
    ));
    assert!(repo.list_departments().expect("departments should list").is_empty());
}

#[test]
fn create_employee_and_list_by_department() {
    let conn = open_db_in_memory().expect("in-memory db should open");
    let departments = SqliteDepartmentRepository::try_new(&conn)
        .expect("repo should accept migrated db");
    let employees = SqliteEmployeeRepository::try_new(&conn)
        .expect("repo should accept migrated db");

    let eng = departments
        .create_department(&NewDepartment::new("Eng"))
        .expect("department insert should succeed");
    let sales = departments
        .create_department(&NewDepartment::new("Sales"))
        .expect("department insert should succeed");

    let a = employees
        .create_employee(&NewEmployee::new("A", 100.0, eng.id))
        .expect("employee insert should succeed");
    employees
        .create_employee(&NewEmployee::new("S", 70.5, sales.id))
        .expect("employee insert should succeed");
    let b = employees
        .create_employee(&NewEmployee::new("B", 200.0, eng.id))
        .expect("employee insert should succeed");

    let loaded = employees
        .get_employee(a.id)
        .expect("employee lookup should succeed")
        .expect("record should exist");
    assert_eq!(loaded, a);

    let in_eng = employees
        .list_employees_by_department(eng.id)
        .expect("department employees should list");
    assert_eq!(in_eng, vec![a, b]);
    assert_eq!(employees.list_employees().expect("employees should list").len(), 3);
}

#[test]
fn employee_with_unknown_department_is_rejected_by_foreign_key() {
    let conn = open_db_in_memory().expect("in-memory db should open");
    let employees = SqliteEmployeeRepository::try_new(&conn)
        .expect("repo should accept migrated db");

    let err = employees
        .create_employee(&NewEmployee::new("Ghost", 10.0, 77))
        .unwrap_err();
    assert!(matches!(err, RepoError::UnknownDepartment(77)));
    assert!(employees.list_employees().expect("employees should list").is_empty());
}

#[test]
fn invalid_salary_is_rejected_before_insert() {
    let conn = open_db_in_memory().expect("in-memory db should open");
    let departments = SqliteDepartmentRepository::try_new(&conn)
        .expect("repo should accept migrated db");
    let employees = SqliteEmployeeRepository::try_new(&conn)
        .expect("repo should accept migrated db");
    let eng = departments
        .create_department(&NewDepartment::new("Eng"))
        .expect("department insert should succeed");

    let err = employees
        .create_employee(&NewEmployee::new("A", -5.0, eng.id))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::NegativeSalary(_))
    ));
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().expect("raw connection should open");

    let result = SqliteEmployeeRepository::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert_eq!(expected_version, latest_version()),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_required_table() {
    let conn = Connection::open_in_memory().expect("raw connection should open");
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .expect("sql batch should execute");

    let result = SqliteDepartmentRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("departments"))
    ));
}

#[test]
fn total_payroll_sums_every_salary() {
    let conn = open_db_in_memory().expect("in-memory db should open");
    let departments =
        SqliteDepartmentRepository::try_new(&conn).expect("repo should accept migrated db");
    let employees =
        SqliteEmployeeRepository::try_new(&conn).expect("repo should accept migrated db");
    assert_eq!(employees.total_payroll().expect("total should load"), 0.0);

    let eng = departments
        .create_department(&NewDepartment::new("Eng"))
        .expect("department insert should succeed");
    for salary in [100.0, 250.5] {
        employees
            .create_employee(&NewEmployee::new("A", salary, eng.id))
            .expect("employee insert should succeed");
    }
    assert_eq!(employees.total_payroll().expect("total should load"), 350.5);
}
