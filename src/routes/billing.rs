use axum::{Json, Router, routing::post};

use crate::{
    dto::billing::{BillingRequest, BillingResponse},
    error::ErrorBody,
    extract::ApiJson,
    services::billing_service::create_bill,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/create", post(create))
}

#[utoipa::path(
    post,
    path = "/api/billing/create",
    request_body = BillingRequest,
    responses(
        (status = 200, description = "Create bill", body = BillingResponse),
        (status = 422, description = "Malformed body", body = ErrorBody)
    ),
    tag = "Billing"
)]
pub async fn create(ApiJson(payload): ApiJson<BillingRequest>) -> Json<BillingResponse> {
    Json(create_bill(payload))
}
