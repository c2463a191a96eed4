use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::MailConfig;

/// Role a message plays in the notification fan-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailPurpose {
    StaffNotification,
    ApplicantConfirmation,
    StaffDigest,
}

impl EmailPurpose {
    pub const fn label(self) -> &'static str {
        match self {
            EmailPurpose::StaffNotification => "staff_notification",
            EmailPurpose::ApplicantConfirmation => "applicant_confirmation",
            EmailPurpose::StaffDigest => "staff_digest",
        }
    }
}

/// A fully rendered message awaiting transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub purpose: EmailPurpose,
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// Delivery failures surfaced by a transport adapter.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("invalid mailbox address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("could not assemble message: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("smtp failure: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
    #[error("mail transport unavailable: {0}")]
    Unavailable(String),
}

/// Outbound mail hook so the submission service can be exercised with
/// recording or failing doubles.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn deliver(&self, email: &OutboundEmail) -> Result<(), MailError>;
}

/// SMTP adapter over the relay named in the environment. Uses STARTTLS on
/// the configured port, matching the relay setups the program's staff use.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl SmtpMailer {
    pub fn from_config(config: &MailConfig) -> Result<Self, MailError> {
        let credentials =
            Credentials::new(config.smtp_user.clone(), config.smtp_password.clone());
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(credentials)
            .build();
        let sender = Mailbox::new(Some(config.sender_name.clone()), config.smtp_user.parse()?);

        Ok(Self { transport, sender })
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn deliver(&self, email: &OutboundEmail) -> Result<(), MailError> {
        let message = Message::builder()
            .from(self.sender.clone())
            .to(email.to.parse()?)
            .subject(email.subject.clone())
            .header(ContentType::TEXT_HTML)
            .body(email.html_body.clone())?;

        self.transport.send(message).await?;
        Ok(())
    }
}
