use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::email::{InvoiceData, InvoiceQuery, InvoiceResponse},
    error::ErrorBody,
    extract::{ApiJson, ApiQuery},
    services::email_service::send_invoice,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/invoice", post(invoice))
}

#[utoipa::path(
    post,
    path = "/api/email/invoice",
    params(InvoiceQuery),
    request_body(content = serde_json::Value, description = "Invoice payload, any JSON object"),
    responses(
        (status = 200, description = "Invoice sent, or queued when the mailer is down", body = InvoiceResponse),
        (status = 422, description = "Missing email or non-object body", body = ErrorBody)
    ),
    tag = "Email"
)]
pub async fn invoice(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<InvoiceQuery>,
    ApiJson(payload): ApiJson<InvoiceData>,
) -> Json<InvoiceResponse> {
    let resp = send_invoice(state.mailer.as_ref(), &query.email, &payload).await;
    Json(resp)
}
