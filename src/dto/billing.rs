use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    pub unit: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BillingRequest {
    pub items: Vec<CartItem>,
    pub customer_email: Option<String>,
    pub subtotal: f64,
    pub gst: f64,
    pub total: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BillingResponse {
    pub success: bool,
    pub bill_id: String,
    pub total: f64,
    pub timestamp: String,
}
