use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::ocr::{OcrResponse, OcrUploadForm},
    error::{AppError, AppResult, ErrorBody},
    extract::ApiMultipart,
    services::ocr_service::{OcrUpload, process_bill},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/process", post(process))
}

#[utoipa::path(
    post,
    path = "/api/ocr/process",
    request_body(content = OcrUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Medicines read from the bill", body = OcrResponse),
        (status = 413, description = "Upload exceeds the body limit", body = ErrorBody),
        (status = 422, description = "No file part", body = ErrorBody),
        (status = 500, description = "OCR service unavailable", body = ErrorBody)
    ),
    tag = "OCR"
)]
pub async fn process(
    State(state): State<AppState>,
    ApiMultipart(mut multipart): ApiMultipart,
) -> AppResult<Json<OcrResponse>> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().map(str::to_owned);
        let content_type = field.content_type().map(str::to_owned);
        let data = field.bytes().await?;
        upload = Some(OcrUpload {
            filename,
            content_type,
            data,
        });
        break;
    }

    let upload = upload.ok_or_else(|| AppError::Unprocessable("file is required".into()))?;
    let resp = process_bill(state.ocr.as_ref(), upload).await?;
    Ok(Json(resp))
}
