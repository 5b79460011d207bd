//! One-shot check that the mail collaborator is reachable and configured.
//!
//! `Start -> CheckConfig -> {Abort | Send} -> {ReportSuccess | ReportFailure}`.
//! No retries. The runner reports to the operator through the writers it is
//! given and returns the outcome; exit codes are the caller's business.

use std::io::Write;
use std::sync::Arc;

use common::{AppError, AppResult};
use domain::{DeliveryReport, OutgoingEmail, TEST_EMAIL_TO_VAR};

use crate::config::TestEmailConfig;
use crate::mailer::Mailer;

/// Sends the fixed test email once.
pub struct TestEmailRunner {
    config: TestEmailConfig,
}

impl TestEmailRunner {
    pub fn new(config: TestEmailConfig) -> Self {
        Self { config }
    }

    /// Run the check.
    ///
    /// `connect` is only called once the recipient has been validated, so a
    /// missing recipient never touches the mail collaborator. Success lines go
    /// to `out`, problems to `err`.
    pub async fn run<F>(
        &self,
        connect: F,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> AppResult<DeliveryReport>
    where
        F: FnOnce() -> AppResult<Arc<dyn Mailer>>,
    {
        let recipient = match self.recipient() {
            Ok(recipient) => recipient,
            Err(e) => {
                emit(err, &e.user_message());
                return Err(e);
            }
        };

        let mailer = match connect() {
            Ok(mailer) => mailer,
            Err(e) => {
                emit(err, &e.user_message());
                return Err(e);
            }
        };

        tracing::info!(to = %recipient, "Sending test email");

        match mailer.send(OutgoingEmail::test_message(recipient)).await {
            Ok(report) => {
                emit(out, &format!("Test email sent: {}", report));
                Ok(report)
            }
            Err(e) => {
                let detail = match e {
                    AppError::Delivery(detail) => detail,
                    other => other.to_string(),
                };
                tracing::error!(error = %detail, "Test email failed");
                emit(err, &format!("Failed to send test email: {}", detail));
                Err(AppError::Delivery(detail))
            }
        }
    }

    fn recipient(&self) -> AppResult<String> {
        let recipient = self
            .config
            .recipient
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .ok_or_else(|| {
                AppError::configuration(format!(
                    "Set {} to the recipient address before running this check.",
                    TEST_EMAIL_TO_VAR
                ))
            })?;

        recipient.parse::<lettre::Address>().map_err(|e| {
            AppError::configuration(format!(
                "{} is not a valid email address ({}): {}",
                TEST_EMAIL_TO_VAR, e, recipient
            ))
        })?;

        Ok(recipient.to_string())
    }
}

fn emit(w: &mut dyn Write, line: &str) {
    if let Err(e) = writeln!(w, "{}", line) {
        tracing::warn!(error = %e, "Failed to write operator output");
    }
}
