use async_trait::async_trait;
use axum::body::Bytes;

use super::IntegrationError;
use crate::{
    dto::ocr::{ExtractedMedicine, OcrResponse},
    error::{AppError, AppResult},
};

/// A bill image or document received from the client.
#[derive(Debug, Clone)]
pub struct OcrUpload {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

/// Reads medicine lines from a scanned supplier bill.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    fn name(&self) -> &str;

    async fn extract(&self, upload: &OcrUpload) -> Result<Vec<ExtractedMedicine>, IntegrationError>;
}

/// Ignores the upload and reports a fixed two-line bill.
#[derive(Debug, Default, Clone)]
pub struct StaticOcrEngine;

#[async_trait]
impl OcrEngine for StaticOcrEngine {
    fn name(&self) -> &str {
        "static"
    }

    async fn extract(
        &self,
        _upload: &OcrUpload,
    ) -> Result<Vec<ExtractedMedicine>, IntegrationError> {
        Ok(vec![
            ExtractedMedicine {
                name: "Paracetamol 500mg".to_string(),
                quantity: 100,
                price: 5,
            },
            ExtractedMedicine {
                name: "Cyclopam Tablet".to_string(),
                quantity: 50,
                price: 45,
            },
        ])
    }
}

pub async fn process_bill(engine: &dyn OcrEngine, upload: OcrUpload) -> AppResult<OcrResponse> {
    tracing::info!(
        engine = engine.name(),
        filename = upload.filename.as_deref().unwrap_or("-"),
        content_type = upload.content_type.as_deref().unwrap_or("-"),
        bytes = upload.data.len(),
        "processing bill upload"
    );

    let medicines = engine.extract(&upload).await.map_err(|err| {
        tracing::warn!(engine = engine.name(), error = %err, "ocr engine failed");
        AppError::ServiceUnavailable("OCR service unavailable".into())
    })?;

    Ok(OcrResponse {
        success: true,
        medicines,
        message: "Bill processed successfully".to_string(),
    })
}
