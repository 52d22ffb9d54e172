use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::email::application::ports::outgoing::{EmailSendError, EmailSender};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// Records messages instead of delivering them. Addresses registered with
/// `fail_for` are refused.
#[derive(Clone, Default)]
pub struct MockEmailSender {
    sent_emails: Arc<Mutex<Vec<SentEmail>>>,
    refused: Arc<Mutex<HashSet<String>>>,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_for(&self, address: &str) {
        if let Ok(mut refused) = self.refused.lock() {
            refused.insert(address.to_string());
        }
    }

    pub fn sent_emails(&self) -> Vec<SentEmail> {
        self.sent_emails
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<(), EmailSendError> {
        let refused = self
            .refused
            .lock()
            .map(|r| r.contains(to))
            .unwrap_or(false);
        if refused {
            return Err(EmailSendError::TransportFailed(format!(
                "{} refused by mock",
                to
            )));
        }

        let mut sent = self
            .sent_emails
            .lock()
            .map_err(|e| EmailSendError::TransportFailed(e.to_string()))?;
        sent.push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            html_body: html_body.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_and_refuses() {
        let sender = MockEmailSender::new();
        sender.fail_for("bounce@example.com");

        sender
            .send_email("ok@example.com", "Hi", "<p>Hi</p>")
            .await
            .unwrap();
        assert!(sender
            .send_email("bounce@example.com", "Hi", "<p>Hi</p>")
            .await
            .is_err());

        let sent = sender.sent_emails();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "ok@example.com");
    }
}
