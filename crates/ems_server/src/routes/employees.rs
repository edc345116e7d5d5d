use super::{employee_service, CreatedResponse};
use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use ems_core::{DepartmentId, EmployeeRecord, NewEmployee, ServiceError, ValidationError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct CreateEmployeeBody {
    name: Option<String>,
    salary: Option<f64>,
    department_id: Option<DepartmentId>,
}

impl CreateEmployeeBody {
    fn into_input(self) -> Result<NewEmployee, ValidationError> {
        let name = self.name.ok_or(ValidationError::MissingField("name"))?;
        let salary = self.salary.ok_or(ValidationError::MissingField("salary"))?;
        let department_id = self
            .department_id
            .ok_or(ValidationError::MissingField("department_id"))?;
        Ok(NewEmployee::new(name, salary, department_id))
    }
}

/// `POST /employees`
///
/// An unknown `department_id` is a client input error here, so it maps to
/// `400` rather than `404`.
pub(super) async fn create_employee(
    State(state): State<AppState>,
    body: Result<Json<CreateEmployeeBody>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let Json(body) = body?;
    let input = body.into_input()?;

    let employee = state
        .with_conn(move |conn| {
            match employee_service(conn)?.add_employee(&input) {
                Ok(employee) => Ok(employee),
                Err(err @ ServiceError::DepartmentNotFound(_)) => {
                    Err(ApiError::Validation(err.to_string()))
                }
                Err(err) => Err(err.into()),
            }
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Employee added",
            id: employee.id,
        }),
    ))
}

/// `GET /employees`
pub(super) async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmployeeRecord>>, ApiError> {
    let employees = state
        .with_conn(|conn| Ok(employee_service(conn)?.list_employees()?))
        .await?;
    Ok(Json(employees))
}
