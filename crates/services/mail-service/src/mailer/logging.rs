//! Development mailer: logs the email instead of sending it.

use async_trait::async_trait;

use common::AppResult;
use domain::{DeliveryReport, OutgoingEmail, LOGGED_RESPONSE};

use super::Mailer;

/// Mailer that writes emails to the log.
pub struct LogMailer {
    from: String,
}

impl LogMailer {
    pub fn new(from: impl Into<String>) -> Self {
        Self { from: from.into() }
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: OutgoingEmail) -> AppResult<DeliveryReport> {
        tracing::warn!("Dry run - logging email instead of sending");
        tracing::info!(
            "=== EMAIL (not sent) ===\n\
             From: {}\n\
             To: {}\n\
             Subject: {}\n\
             Body:\n{}\n\
             ========================",
            self.from,
            email.to,
            email.subject,
            email.html_body
        );

        Ok(DeliveryReport::accepted([email.to]).with_response(LOGGED_RESPONSE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reports_recipient_as_accepted() {
        let mailer = LogMailer::new("noreply@example.com");

        let report = mailer
            .send(OutgoingEmail::test_message("qa@example.com"))
            .await
            .unwrap();

        assert_eq!(report.accepted, vec!["qa@example.com".to_string()]);
        assert_eq!(report.response, LOGGED_RESPONSE);
    }
}
