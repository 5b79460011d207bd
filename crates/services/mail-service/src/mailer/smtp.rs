//! SMTP mailer backed by lettre.

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use uuid::Uuid;

use common::{AppError, AppResult, SmtpConfig};
use domain::{DeliveryReport, OutgoingEmail};

use super::Mailer;

/// Mailer that submits messages to an SMTP relay.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    host: String,
}

impl SmtpMailer {
    /// Build the transport from configuration. Does not connect.
    pub fn from_config(config: &SmtpConfig) -> AppResult<Self> {
        let host = config
            .host
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .ok_or_else(|| AppError::configuration("SMTP_HOST is not set"))?;

        let from: Mailbox = config.from.parse().map_err(|e| {
            AppError::configuration(format!("SMTP_FROM is not a valid address: {}", e))
        })?;

        let mut builder = if config.tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host).map_err(|e| {
                AppError::configuration(format!("Invalid SMTP relay {}: {}", host, e))
            })?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
        };
        builder = builder.port(config.port);

        if let Some(user) = &config.user {
            let password = config.password.clone().unwrap_or_default();
            builder = builder.credentials(Credentials::new(user.clone(), password));
        }

        tracing::debug!(host, port = config.port, tls = config.tls, "SMTP transport configured");

        Ok(Self {
            transport: builder.build(),
            from,
            host: host.to_string(),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: OutgoingEmail) -> AppResult<DeliveryReport> {
        let to: Mailbox = email
            .to
            .parse()
            .map_err(|e| AppError::delivery(format!("Invalid recipient {}: {}", email.to, e)))?;

        let message_id = format!("<{}@{}>", Uuid::new_v4(), self.host);
        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(email.subject.clone())
            .message_id(Some(message_id.clone()))
            .header(ContentType::TEXT_HTML)
            .body(email.html_body.clone())
            .map_err(|e| AppError::delivery(format!("Failed to build message: {}", e)))?;

        tracing::info!(
            to = %email.to,
            from = %self.from,
            subject = %email.subject,
            "Sending email via SMTP"
        );

        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| AppError::delivery(e.to_string()))?;

        let line = format!(
            "{} {}",
            response.code(),
            response.message().collect::<Vec<_>>().join(" ")
        );
        tracing::info!(to = %email.to, response = %line, "Email accepted by relay");

        Ok(DeliveryReport::accepted([email.to])
            .with_message_id(message_id)
            .with_response(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(host: Option<&str>) -> SmtpConfig {
        SmtpConfig {
            host: host.map(str::to_string),
            ..SmtpConfig::default()
        }
    }

    #[test]
    fn requires_host() {
        let result = SmtpMailer::from_config(&config(None));

        assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[test]
    fn rejects_invalid_sender() {
        let mut config = config(Some("smtp.example.com"));
        config.from = "not an address".to_string();

        let result = SmtpMailer::from_config(&config);

        assert!(matches!(result, Err(AppError::Configuration(msg)) if msg.contains("SMTP_FROM")));
    }

    #[tokio::test]
    async fn invalid_recipient_fails_before_connecting() {
        let mut config = config(Some("127.0.0.1"));
        config.tls = false;
        config.port = 1;
        let mailer = SmtpMailer::from_config(&config).unwrap();

        let result = mailer.send(OutgoingEmail::test_message("nobody")).await;

        assert!(matches!(result, Err(AppError::Delivery(msg)) if msg.contains("Invalid recipient")));
    }
}
