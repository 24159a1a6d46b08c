use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InvoiceQuery {
    /// Recipient address.
    pub email: String,
}

/// Invoice payload. Any JSON object is accepted and passed to the mailer as-is.
pub type InvoiceData = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Serialize, ToSchema)]
pub struct InvoiceResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queued: Option<bool>,
}

impl InvoiceResponse {
    pub fn sent() -> Self {
        Self {
            success: true,
            message: "Invoice sent successfully".to_string(),
            queued: None,
        }
    }

    pub fn queued() -> Self {
        Self {
            success: false,
            message: "Email queued for retry".to_string(),
            queued: Some(true),
        }
    }
}
