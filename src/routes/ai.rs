use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::ai::{AiRequest, SuggestResponse},
    error::{AppResult, ErrorBody},
    extract::ApiJson,
    services::ai_service::suggest_medicines,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/suggest", post(suggest))
}

#[utoipa::path(
    post,
    path = "/api/ai/suggest",
    request_body = AiRequest,
    responses(
        (status = 200, description = "Medicine suggestions", body = SuggestResponse),
        (status = 500, description = "AI service unavailable", body = ErrorBody)
    ),
    tag = "AI"
)]
pub async fn suggest(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<AiRequest>,
) -> AppResult<Json<SuggestResponse>> {
    let resp = suggest_medicines(state.suggestions.as_ref(), &payload.symptoms).await?;
    Ok(Json(resp))
}
