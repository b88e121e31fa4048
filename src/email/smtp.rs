/**
 * SMTP Mailer
 *
 * Thin wrapper around lettre's async SMTP transport. The only message this
 * service sends is the password-reset link.
 */

use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::error::AuthError;

/// Mailer backed by an SMTP relay with STARTTLS.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Build a mailer from relay host, credentials, and sender address.
    pub fn new(
        host: &str,
        username: &str,
        password: &str,
        from: &str,
    ) -> Result<Self, AuthError> {
        let creds = Credentials::new(username.to_string(), password.to_string());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
            .map_err(|e| AuthError::internal(format!("Failed to build SMTP relay: {e}")))?
            .credentials(creds)
            .build();

        let from: Mailbox = from
            .parse()
            .map_err(|e| AuthError::internal(format!("MAIL_FROM is not a valid mailbox: {e}")))?;

        Ok(Self { transport, from })
    }

    /// Send the password-reset email.
    ///
    /// `reset_link` carries the raw token; it is never logged.
    pub async fn send_password_reset(&self, to: &str, reset_link: &str) -> Result<(), AuthError> {
        let to: Mailbox = to
            .parse()
            .map_err(|e| AuthError::validation(format!("Recipient email is invalid: {e}")))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject("Reset your password")
            .body(format!(
                "Someone requested a password reset for your account.\n\n\
                 Reset link (valid for 10 minutes):\n{reset_link}\n\n\
                 If this wasn't you, ignore this email."
            ))
            .map_err(|e| AuthError::internal(format!("Failed to build email: {e}")))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| AuthError::internal(format!("SMTP send failed: {e}")))?;

        Ok(())
    }
}
