//! SMTP implementation of the mailer trait using lettre.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{debug, error};

use gh_core::services::verification::MailerTrait;
use gh_shared::config::MailConfig;

use crate::InfrastructureError;

/// Mailer sending verification codes over SMTP
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl SmtpMailer {
    /// Create a new SMTP mailer from configuration
    pub fn new(config: &MailConfig) -> Result<Self, InfrastructureError> {
        let sender: Mailbox = config
            .sender
            .parse()
            .map_err(|e| InfrastructureError::Config(format!("invalid sender address: {}", e)))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self { transport, sender })
    }
}

#[async_trait]
impl MailerTrait for SmtpMailer {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<(), String> {
        let recipient: Mailbox = email
            .parse()
            .map_err(|e| format!("invalid recipient address: {}", e))?;

        let body = format!(
            "Your Gatehouse verification code is: {code}\n\n\
             The code expires in a few minutes. If you did not request it,\n\
             you can ignore this message."
        );

        let message = Message::builder()
            .from(self.sender.clone())
            .to(recipient)
            .subject("Your Gatehouse verification code")
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| format!("failed to build message: {}", e))?;

        match self.transport.send(message).await {
            Ok(_) => {
                debug!(email, "verification email sent");
                Ok(())
            }
            Err(e) => {
                error!(email, "SMTP send failed: {}", e);
                Err(e.to_string())
            }
        }
    }
}
