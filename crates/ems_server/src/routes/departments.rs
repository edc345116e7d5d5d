use super::{department_service, CreatedResponse};
use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ems_core::{DepartmentId, DepartmentRecord, ValidationError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct CreateDepartmentBody {
    name: Option<String>,
}

/// `POST /departments`
pub(super) async fn create_department(
    State(state): State<AppState>,
    body: Result<Json<CreateDepartmentBody>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let Json(body) = body?;
    let name = body.name.ok_or(ValidationError::MissingField("name"))?;

    let department = state
        .with_conn(move |conn| Ok(department_service(conn)?.add_department(name)?))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Department added",
            id: department.id,
        }),
    ))
}

/// `GET /departments`
pub(super) async fn list_departments(
    State(state): State<AppState>,
) -> Result<Json<Vec<DepartmentRecord>>, ApiError> {
    let departments = state
        .with_conn(|conn| Ok(department_service(conn)?.list_departments()?))
        .await?;
    Ok(Json(departments))
}

/// `GET /departments/{id}`
pub(super) async fn get_department(
    State(state): State<AppState>,
    id: Result<Path<DepartmentId>, PathRejection>,
) -> Result<Json<DepartmentRecord>, ApiError> {
    let Path(id) = id?;
    let department = state
        .with_conn(move |conn| Ok(department_service(conn)?.get_department(id)?))
        .await?;
    Ok(Json(department))
}
