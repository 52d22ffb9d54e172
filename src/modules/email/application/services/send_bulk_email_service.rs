use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use std::collections::HashSet;
use std::sync::Arc;

use crate::email::application::ports::{
    incoming::use_cases::{
        BulkEmailReport, FailedDelivery, SendBulkEmailCommand, SendBulkEmailError,
        SendBulkEmailUseCase,
    },
    outgoing::{EmailSender, Recipient, RecipientQuery},
};
use crate::membership::application::domain::entities::SocietyRole;
use crate::membership::application::helpers::SocietyAccess;
use crate::society::application::ports::outgoing::SocietyQuery;

const MAX_IN_FLIGHT: usize = 8;

const BULK_SENDERS: [SocietyRole; 2] = [SocietyRole::President, SocietyRole::GeneralSecretary];

#[derive(Clone)]
pub struct SendBulkEmailService<S, Q>
where
    S: SocietyQuery + Send + Sync,
    Q: RecipientQuery + Send + Sync,
{
    access: SocietyAccess,
    society_query: S,
    recipient_query: Q,
    sender: Arc<dyn EmailSender + Send + Sync>,
}

impl<S, Q> SendBulkEmailService<S, Q>
where
    S: SocietyQuery + Send + Sync,
    Q: RecipientQuery + Send + Sync,
{
    pub fn new(
        access: SocietyAccess,
        society_query: S,
        recipient_query: Q,
        sender: Arc<dyn EmailSender + Send + Sync>,
    ) -> Self {
        Self {
            access,
            society_query,
            recipient_query,
            sender,
        }
    }
}

/// First occurrence wins; addresses compare case-insensitively.
fn unique_addresses(recipients: Vec<Recipient>) -> Vec<String> {
    let mut seen = HashSet::new();
    recipients
        .into_iter()
        .map(|r| r.email.trim().to_string())
        .filter(|email| !email.is_empty() && seen.insert(email.to_lowercase()))
        .collect()
}

#[async_trait]
impl<S, Q> SendBulkEmailUseCase for SendBulkEmailService<S, Q>
where
    S: SocietyQuery + Send + Sync,
    Q: RecipientQuery + Send + Sync,
{
    async fn execute(
        &self,
        command: SendBulkEmailCommand,
    ) -> Result<BulkEmailReport, SendBulkEmailError> {
        let society = self
            .society_query
            .find_by_id(command.society_id())
            .await
            .map_err(|e| SendBulkEmailError::RepositoryError(e.to_string()))?
            .ok_or(SendBulkEmailError::SocietyNotFound)?;

        if society.status.is_deleted() {
            return Err(SendBulkEmailError::SocietyDeleted);
        }

        self.access
            .require_any(command.actor(), society.id, &BULK_SENDERS)
            .await?;

        let recipients = self
            .recipient_query
            .society_recipients(society.id, command.role_filter())
            .await
            .map_err(|e| SendBulkEmailError::RepositoryError(e.to_string()))?;
        let addresses = unique_addresses(recipients);

        let subject = command.subject();
        let body = command.body();
        let outcomes: Vec<_> = stream::iter(addresses)
            .map(|email| async move {
                let result = self.sender.send_email(&email, subject, body).await;
                (email, result)
            })
            .buffer_unordered(MAX_IN_FLIGHT)
            .collect()
            .await;

        let mut report = BulkEmailReport::default();
        for (email, result) in outcomes {
            match result {
                Ok(()) => report.sent.push(email),
                Err(err) => {
                    tracing::warn!(society_id = %society.id, error = %err, "Bulk email delivery failed");
                    report.failed.push(FailedDelivery {
                        email,
                        reason: err.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            society_id = %society.id,
            sent = report.sent.len(),
            failed = report.failed.len(),
            "Bulk email finished"
        );
        Ok(report)
    }
}
