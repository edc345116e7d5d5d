use super::analytics_service;
use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use ems_core::{DepartmentAnalytics, DepartmentId, PayrollSummary};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(super) struct AnalyticsParams {
    department_id: Option<DepartmentId>,
}

/// Wire shape of one analytics entry.
#[derive(Debug, Serialize)]
pub(super) struct AnalyticsEntry {
    department: String,
    highest_paid_employee: String,
    average_salary: f64,
}

impl From<DepartmentAnalytics> for AnalyticsEntry {
    fn from(value: DepartmentAnalytics) -> Self {
        Self {
            department: value.department,
            highest_paid_employee: value.highest_paid_employee,
            average_salary: value.average_salary,
        }
    }
}

/// `GET /analytics[?department_id=<id>]`
pub(super) async fn department_analytics(
    State(state): State<AppState>,
    params: Result<Query<AnalyticsParams>, QueryRejection>,
) -> Result<Json<Vec<AnalyticsEntry>>, ApiError> {
    let Query(params) = params?;
    let entries = state
        .with_conn(move |conn| {
            Ok(analytics_service(conn)?.department_analytics(params.department_id)?)
        })
        .await?;
    Ok(Json(entries.into_iter().map(AnalyticsEntry::from).collect()))
}

/// `GET /analytics/summary`
pub(super) async fn payroll_summary(
    State(state): State<AppState>,
) -> Result<Json<PayrollSummary>, ApiError> {
    let summary = state
        .with_conn(|conn| Ok(analytics_service(conn)?.payroll_summary()?))
        .await?;
    Ok(Json(summary))
}
