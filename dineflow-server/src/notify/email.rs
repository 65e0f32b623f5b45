//! Email transport (SMTP via lettre)

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

/// Async SMTP client
#[derive(Clone)]
pub struct EmailClient {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl EmailClient {
    /// Build from credentials; `None` when user/password are unset or the
    /// relay cannot be constructed
    pub fn from_config(smtp_server: &str, user: Option<&str>, pass: Option<&str>) -> Option<Self> {
        let user = user?;
        let pass = pass?;
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_server)
            .ok()?
            .credentials(Credentials::new(user.to_string(), pass.to_string()))
            .build();
        let from: Mailbox = format!("DineFlow <{user}>").parse().ok()?;
        Some(Self { transport, from })
    }

    /// Send one HTML email
    pub async fn send(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(to.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body.to_string())?;

        self.transport.send(message).await?;
        Ok(())
    }
}
