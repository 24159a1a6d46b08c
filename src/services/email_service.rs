use async_trait::async_trait;

use super::IntegrationError;
use crate::dto::email::{InvoiceData, InvoiceResponse};

/// Delivers invoice emails.
#[async_trait]
pub trait MailSender: Send + Sync {
    fn name(&self) -> &str;

    async fn send_invoice(&self, to: &str, invoice: &InvoiceData) -> Result<(), IntegrationError>;
}

/// Writes the delivery to the log instead of sending it.
#[derive(Debug, Default, Clone)]
pub struct LogMailSender;

#[async_trait]
impl MailSender for LogMailSender {
    fn name(&self) -> &str {
        "log"
    }

    async fn send_invoice(&self, to: &str, invoice: &InvoiceData) -> Result<(), IntegrationError> {
        tracing::info!(to = %to, fields = invoice.len(), "invoice email delivered");
        Ok(())
    }
}

/// Sends the invoice; a mailer failure downgrades the response to "queued".
pub async fn send_invoice(mailer: &dyn MailSender, to: &str, invoice: &InvoiceData) -> InvoiceResponse {
    tracing::info!(mailer = mailer.name(), to = %to, "sending invoice");

    match mailer.send_invoice(to, invoice).await {
        Ok(()) => InvoiceResponse::sent(),
        Err(err) => {
            tracing::warn!(mailer = mailer.name(), to = %to, error = %err, "invoice queued for retry");
            InvoiceResponse::queued()
        }
    }
}
