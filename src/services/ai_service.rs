use async_trait::async_trait;

use super::IntegrationError;
use crate::{
    dto::ai::{SuggestResponse, Suggestion},
    error::{AppError, AppResult},
};

/// Number of symptom characters written to the log.
const SYMPTOM_LOG_CHARS: usize = 50;

/// Source of medicine suggestions for a free-text symptom description.
#[async_trait]
pub trait SuggestionEngine: Send + Sync {
    fn name(&self) -> &str;

    async fn suggest(&self, symptoms: &str) -> Result<Vec<Suggestion>, IntegrationError>;
}

/// Returns the same two over-the-counter suggestions for any input.
#[derive(Debug, Default, Clone)]
pub struct StaticSuggestionEngine;

#[async_trait]
impl SuggestionEngine for StaticSuggestionEngine {
    fn name(&self) -> &str {
        "static"
    }

    async fn suggest(&self, _symptoms: &str) -> Result<Vec<Suggestion>, IntegrationError> {
        Ok(vec![
            Suggestion {
                name: "Paracetamol 500mg".to_string(),
                usage: "Take 1 tablet every 6 hours after meals".to_string(),
                quantity: "1 strip (10 tablets)".to_string(),
                available: true,
            },
            Suggestion {
                name: "Gelusil Syrup".to_string(),
                usage: "Take 2 teaspoons after meals".to_string(),
                quantity: "1 bottle".to_string(),
                available: true,
            },
        ])
    }
}

pub async fn suggest_medicines(
    engine: &dyn SuggestionEngine,
    symptoms: &str,
) -> AppResult<SuggestResponse> {
    let preview: String = symptoms.chars().take(SYMPTOM_LOG_CHARS).collect();
    tracing::info!(engine = engine.name(), symptoms = %preview, "processing symptoms");

    let suggestions = engine.suggest(symptoms).await.map_err(|err| {
        tracing::warn!(engine = engine.name(), error = %err, "suggestion engine failed");
        AppError::ServiceUnavailable("AI service unavailable".into())
    })?;

    Ok(SuggestResponse {
        success: true,
        suggestions,
    })
}
