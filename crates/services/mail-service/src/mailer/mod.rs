//! Mail collaborators.
//!
//! `Mailer` is the seam between the test email runner and whatever actually
//! transmits mail. `SmtpMailer` talks to a relay through lettre; `LogMailer`
//! only logs the message, for development.

mod logging;
mod smtp;

use std::sync::Arc;

use async_trait::async_trait;

use common::{AppError, AppResult};
use domain::{DeliveryReport, OutgoingEmail};

use crate::config::MailServiceConfig;

pub use logging::LogMailer;
pub use smtp::SmtpMailer;

#[cfg(test)]
use mockall::automock;

/// Mail-sending collaborator.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send one email and describe the outcome
    async fn send(&self, email: OutgoingEmail) -> AppResult<DeliveryReport>;
}

/// Pick the mailer for the given configuration.
///
/// `dry_run` selects the logging mailer. Otherwise an SMTP relay host is
/// required.
pub fn build_mailer(config: &MailServiceConfig, dry_run: bool) -> AppResult<Arc<dyn Mailer>> {
    if dry_run {
        return Ok(Arc::new(LogMailer::new(config.smtp.from.clone())));
    }

    if !config.smtp.is_configured() {
        return Err(AppError::configuration(
            "Set SMTP_HOST to the mail relay host, or pass --dry-run to log the email instead.",
        ));
    }

    Ok(Arc::new(SmtpMailer::from_config(&config.smtp)?))
}
