//! Mail service configuration.

use std::env;

use common::SmtpConfig;

/// Mail service configuration.
#[derive(Debug, Clone, Default)]
pub struct MailServiceConfig {
    /// SMTP relay settings
    pub smtp: SmtpConfig,
}

impl MailServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = SmtpConfig::default();

        Self {
            smtp: SmtpConfig {
                host: env::var("SMTP_HOST").ok().filter(|h| !h.trim().is_empty()),
                port: env::var("SMTP_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.port),
                user: env::var("SMTP_USER").ok(),
                password: env::var("SMTP_PASS").ok(),
                from: env::var("SMTP_FROM").unwrap_or(defaults.from),
                tls: env::var("SMTP_TLS")
                    .map(|v| v == "true" || v == "1")
                    .unwrap_or(defaults.tls),
            },
        }
    }
}

/// Input of the test email check.
///
/// Built by the caller; the runner never reads the environment itself.
#[derive(Debug, Clone, Default)]
pub struct TestEmailConfig {
    /// Recipient address (from TEST_EMAIL_TO)
    pub recipient: Option<String>,
}

impl TestEmailConfig {
    pub fn new(recipient: Option<String>) -> Self {
        Self { recipient }
    }
}
