use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub(super) struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// `GET /health`
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: ems_core::core_version(),
    })
}
