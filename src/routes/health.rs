use axum::Json;

use crate::dto::system::{HealthStatus, RootInfo, ServiceStates};

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service banner", body = RootInfo),
    ),
    tag = "Health"
)]
pub async fn root() -> Json<RootInfo> {
    Json(RootInfo {
        message: "Aushadhi 360 API - Running".to_string(),
        version: "1.0.0".to_string(),
    })
}

// Nothing is probed; every dependency is reported as up.
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "OK", body = HealthStatus),
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthStatus> {
    let services = ServiceStates {
        database: "connected".to_string(),
        ai: "available".to_string(),
        ocr: "available".to_string(),
        email: "available".to_string(),
    };

    Json(HealthStatus {
        status: "healthy".to_string(),
        services,
    })
}
