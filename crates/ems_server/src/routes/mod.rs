//! Route table and request logging.

mod analytics;
mod departments;
mod employees;
mod health;

use crate::state::AppState;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use ems_core::{
    AnalyticsService, DepartmentService, EmployeeService, RepoResult, SqliteDepartmentRepository,
    SqliteEmployeeRepository,
};
use log::info;
use rusqlite::Connection;
use serde::Serialize;
use std::time::Instant;
use tower_http::cors::CorsLayer;

type SqliteDepartmentService<'conn> =
    DepartmentService<SqliteDepartmentRepository<'conn>, SqliteEmployeeRepository<'conn>>;
type SqliteEmployeeService<'conn> =
    EmployeeService<SqliteDepartmentRepository<'conn>, SqliteEmployeeRepository<'conn>>;
type SqliteAnalyticsService<'conn> =
    AnalyticsService<SqliteDepartmentRepository<'conn>, SqliteEmployeeRepository<'conn>>;

/// Builds the full API router over `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/departments",
            get(departments::list_departments).post(departments::create_department),
        )
        .route("/departments/{id}", get(departments::get_department))
        .route(
            "/employees",
            get(employees::list_employees).post(employees::create_employee),
        )
        .route("/analytics", get(analytics::department_analytics))
        .route("/analytics/summary", get(analytics::payroll_summary))
        .route("/health", get(health::health))
        .layer(middleware::from_fn(log_request))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Body returned by the create endpoints.
#[derive(Debug, Serialize)]
struct CreatedResponse {
    message: &'static str,
    id: i64,
}

fn department_service(conn: &Connection) -> RepoResult<SqliteDepartmentService<'_>> {
    Ok(DepartmentService::new(
        SqliteDepartmentRepository::try_new(conn)?,
        SqliteEmployeeRepository::try_new(conn)?,
    ))
}

fn employee_service(conn: &Connection) -> RepoResult<SqliteEmployeeService<'_>> {
    Ok(EmployeeService::new(
        SqliteDepartmentRepository::try_new(conn)?,
        SqliteEmployeeRepository::try_new(conn)?,
    ))
}

fn analytics_service(conn: &Connection) -> RepoResult<SqliteAnalyticsService<'_>> {
    Ok(AnalyticsService::new(
        SqliteDepartmentRepository::try_new(conn)?,
        SqliteEmployeeRepository::try_new(conn)?,
    ))
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started_at = Instant::now();

    let response = next.run(request).await;

    info!(
        "event=http_request module=server status={} method={} path={} duration_ms={}",
        response.status().as_u16(),
        method,
        path,
        started_at.elapsed().as_millis()
    );
    response
}
