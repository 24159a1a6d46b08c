use thiserror::Error;

pub mod ai_service;
pub mod auth_service;
pub mod billing_service;
pub mod email_service;
pub mod ocr_service;

/// Failure reported by an external collaborator (AI engine, OCR engine, mailer).
#[derive(Debug, Error)]
pub enum IntegrationError {
    #[error("{0} is unavailable")]
    Unavailable(&'static str),

    #[error("{service} rejected the request: {reason}")]
    Rejected {
        service: &'static str,
        reason: String,
    },
}
