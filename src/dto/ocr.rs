use serde::Serialize;
use utoipa::ToSchema;

/// Multipart form accepted by the OCR route. Only used for the API document.
#[allow(dead_code)]
#[derive(ToSchema)]
pub struct OcrUploadForm {
    #[schema(value_type = String, content_media_type = "application/octet-stream")]
    pub file: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ExtractedMedicine {
    pub name: String,
    pub quantity: i64,
    pub price: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OcrResponse {
    pub success: bool,
    pub medicines: Vec<ExtractedMedicine>,
    pub message: String,
}
