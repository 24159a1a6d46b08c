use axum::{Json, Router, routing::post};

use crate::{
    dto::auth::{LoginRequest, LoginResponse},
    error::{AppResult, ErrorBody},
    extract::ApiJson,
    services::auth_service::login_user,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login user", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorBody),
        (status = 422, description = "Malformed body", body = ErrorBody)
    ),
    tag = "Auth"
)]
pub async fn login(ApiJson(payload): ApiJson<LoginRequest>) -> AppResult<Json<LoginResponse>> {
    let resp = login_user(payload)?;
    Ok(Json(resp))
}
