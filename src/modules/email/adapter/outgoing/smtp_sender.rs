use async_trait::async_trait;
use lettre::address::AddressError;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{
    message::header::ContentType, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::config::SmtpConfig;
use crate::email::application::ports::outgoing::{EmailSendError, EmailSender};

/// Seam over the lettre transport so message building can be tested offline.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

pub struct SmtpEmailSender {
    mailer: Box<dyn Mailer>,
    from_email: String,
}

impl SmtpEmailSender {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>, from_email: &str) -> Self {
        Self {
            mailer,
            from_email: from_email.to_string(),
        }
    }

    pub fn from_config(config: &SmtpConfig) -> Result<Self, EmailSendError> {
        match config {
            SmtpConfig::Relay {
                server,
                username,
                password,
                from_email,
            } => {
                let creds = Credentials::new(username.clone(), password.clone());
                let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(server)
                    .map_err(|e| EmailSendError::TransportFailed(e.to_string()))?
                    .credentials(creds)
                    .build();

                Ok(Self::new_with_mailer(Box::new(transport), from_email))
            }
            SmtpConfig::Local {
                host,
                port,
                from_email,
            } => {
                let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
                    .port(*port)
                    .build();

                Ok(Self::new_with_mailer(Box::new(transport), from_email))
            }
        }
    }

    fn build_message(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<Message, EmailSendError> {
        let from: Mailbox = self
            .from_email
            .parse()
            .map_err(|e: AddressError| EmailSendError::InvalidAddress {
                address: self.from_email.clone(),
                reason: e.to_string(),
            })?;
        let to: Mailbox = to
            .parse()
            .map_err(|e: AddressError| EmailSendError::InvalidAddress {
                address: to.to_string(),
                reason: e.to_string(),
            })?;

        Message::builder()
            .from(from)
            .to(to)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body.to_string())
            .map_err(|e| EmailSendError::BuildFailed(e.to_string()))
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<(), EmailSendError> {
        let email = self.build_message(to, subject, html_body)?;
        self.mailer
            .send(email)
            .await
            .map_err(EmailSendError::TransportFailed)
    }
}
