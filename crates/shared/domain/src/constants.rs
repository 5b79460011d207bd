//! Domain-level constants.
//!
//! These constants define fixed values shared by the services.

// =============================================================================
// Test Email
// =============================================================================

/// Environment variable holding the test email recipient
pub const TEST_EMAIL_TO_VAR: &str = "TEST_EMAIL_TO";

/// Subject line of the test email
pub const TEST_EMAIL_SUBJECT: &str = "Test email";

/// HTML body of the test email
pub const TEST_EMAIL_HTML_BODY: &str =
    "<h1>It works!</h1><p>This is a test email sent to verify the mail configuration.</p>";

// =============================================================================
// SMTP
// =============================================================================

/// Default SMTP submission port (STARTTLS)
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when SMTP_FROM is not set
pub const DEFAULT_SMTP_FROM: &str = "noreply@example.com";

/// Response line reported by mailers that do not talk to a server
pub const LOGGED_RESPONSE: &str = "logged";
