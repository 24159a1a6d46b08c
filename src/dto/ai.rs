use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AiRequest {
    pub symptoms: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Suggestion {
    pub name: String,
    pub usage: String,
    pub quantity: String,
    pub available: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SuggestResponse {
    pub success: bool,
    pub suggestions: Vec<Suggestion>,
}
