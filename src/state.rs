use std::sync::Arc;

use crate::services::{
    ai_service::{StaticSuggestionEngine, SuggestionEngine},
    email_service::{LogMailSender, MailSender},
    ocr_service::{OcrEngine, StaticOcrEngine},
};

#[derive(Clone)]
pub struct AppState {
    pub suggestions: Arc<dyn SuggestionEngine>,
    pub ocr: Arc<dyn OcrEngine>,
    pub mailer: Arc<dyn MailSender>,
}

impl AppState {
    pub fn new(
        suggestions: Arc<dyn SuggestionEngine>,
        ocr: Arc<dyn OcrEngine>,
        mailer: Arc<dyn MailSender>,
    ) -> Self {
        Self {
            suggestions,
            ocr,
            mailer,
        }
    }
}

/// Stub collaborators that never fail.
impl Default for AppState {
    fn default() -> Self {
        Self::new(
            Arc::new(StaticSuggestionEngine),
            Arc::new(StaticOcrEngine),
            Arc::new(LogMailSender),
        )
    }
}
