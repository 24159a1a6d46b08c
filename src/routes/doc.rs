use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        ai::{AiRequest, SuggestResponse, Suggestion},
        auth::{LoginRequest, LoginResponse},
        billing::{BillingRequest, BillingResponse, CartItem},
        email::InvoiceResponse,
        ocr::{ExtractedMedicine, OcrResponse, OcrUploadForm},
        system::{HealthStatus, RootInfo, ServiceStates},
    },
    error::ErrorBody,
    routes::{ai, auth, billing, email, health, ocr},
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Aushadhi 360 API"),
    paths(
        health::root,
        health::health_check,
        auth::login,
        billing::create,
        email::invoice,
        ai::suggest,
        ocr::process
    ),
    components(
        schemas(
            RootInfo,
            HealthStatus,
            ServiceStates,
            LoginRequest,
            LoginResponse,
            CartItem,
            BillingRequest,
            BillingResponse,
            InvoiceResponse,
            AiRequest,
            Suggestion,
            SuggestResponse,
            OcrUploadForm,
            ExtractedMedicine,
            OcrResponse,
            ErrorBody
        )
    ),
    tags(
        (name = "Health", description = "Service status endpoints"),
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Billing", description = "Billing endpoints"),
        (name = "Email", description = "Invoice email endpoints"),
        (name = "AI", description = "Symptom based suggestions"),
        (name = "OCR", description = "Supplier bill scanning"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
