use aushadhi_api::routes::health::{health_check, root};

#[tokio::test]
async fn root_reports_banner_and_version() {
    let response = root().await;
    assert_eq!(response.0.message, "Aushadhi 360 API - Running");
    assert_eq!(response.0.version, "1.0.0");
}

#[tokio::test]
async fn health_check_reports_every_service_up() {
    let response = health_check().await;
    assert_eq!(response.0.status, "healthy");

    let services = &response.0.services;
    assert_eq!(services.database, "connected");
    assert_eq!(services.ai, "available");
    assert_eq!(services.ocr, "available");
    assert_eq!(services.email, "available");
}
