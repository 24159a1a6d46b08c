use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct RootInfo {
    pub message: String,
    pub version: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceStates {
    pub database: String,
    pub ai: String,
    pub ocr: String,
    pub email: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub services: ServiceStates,
}
