//! Email value objects exchanged with the mail collaborator.

use serde::{Deserialize, Serialize};

use crate::constants::{TEST_EMAIL_HTML_BODY, TEST_EMAIL_SUBJECT};

/// A single HTML email ready to hand to a mailer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingEmail {
    /// Recipient email address
    pub to: String,
    /// Email subject line
    pub subject: String,
    /// HTML body content
    pub html_body: String,
}

impl OutgoingEmail {
    /// Create a new email
    pub fn new(
        to: impl Into<String>,
        subject: impl Into<String>,
        html_body: impl Into<String>,
    ) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            html_body: html_body.into(),
        }
    }

    /// The fixed connectivity check email
    pub fn test_message(to: impl Into<String>) -> Self {
        Self::new(to, TEST_EMAIL_SUBJECT, TEST_EMAIL_HTML_BODY)
    }
}

/// Result descriptor returned by a mailer after a send
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReport {
    /// Recipients the server accepted
    pub accepted: Vec<String>,
    /// Recipients the server rejected
    #[serde(default)]
    pub rejected: Vec<String>,
    /// Message-ID header of the sent message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    /// Server response line
    #[serde(default)]
    pub response: String,
}

impl DeliveryReport {
    /// Report for a message accepted for the given recipients
    pub fn accepted(recipients: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            accepted: recipients.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = Some(message_id.into());
        self
    }

    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.response = response.into();
        self
    }
}

impl std::fmt::Display for DeliveryReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        write!(f, "{}", json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_uses_fixed_content() {
        let email = OutgoingEmail::test_message("qa@example.com");

        assert_eq!(email.to, "qa@example.com");
        assert_eq!(email.subject, TEST_EMAIL_SUBJECT);
        assert_eq!(email.html_body, TEST_EMAIL_HTML_BODY);
    }

    #[test]
    fn report_displays_as_json() {
        let report = DeliveryReport::accepted(["qa@example.com"]).with_response("250 OK");

        assert_eq!(
            report.to_string(),
            r#"{"accepted":["qa@example.com"],"rejected":[],"response":"250 OK"}"#
        );
    }
}
