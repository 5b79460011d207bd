//! Mail Service Library
//!
//! This crate sends mail through an SMTP relay and provides the one-shot
//! test email check operators use to verify the relay configuration.
//! It can be run as a standalone binary or embedded in the combined binary.

pub mod config;
pub mod mailer;
pub mod runner;

use std::io;

use common::AppResult;
use domain::DeliveryReport;

use crate::config::{MailServiceConfig, TestEmailConfig};
use crate::mailer::build_mailer;
use crate::runner::TestEmailRunner;

/// Options for the test email command.
#[derive(Debug, Clone, Default)]
pub struct SendTestOptions {
    /// Recipient address
    pub recipient: Option<String>,
    /// Log the email instead of sending it
    pub dry_run: bool,
}

/// Send the test email, reporting to stdout/stderr (for CLI commands).
pub async fn run_send_test(options: SendTestOptions) -> AppResult<DeliveryReport> {
    let config = MailServiceConfig::from_env();
    tracing::debug!(smtp = ?config.smtp, dry_run = options.dry_run, "Mail configuration loaded");

    let runner = TestEmailRunner::new(TestEmailConfig::new(options.recipient));
    let mut out = io::stdout();
    let mut err = io::stderr();

    runner
        .run(
            || build_mailer(&config, options.dry_run),
            &mut out,
            &mut err,
        )
        .await
}
