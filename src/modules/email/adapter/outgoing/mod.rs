#[cfg(test)]
pub mod mock_sender;
mod recipient_query_postgres;
pub mod smtp_sender;

#[cfg(test)]
pub use mock_sender::MockEmailSender;
pub use recipient_query_postgres::RecipientQueryPostgres;
pub use smtp_sender::SmtpEmailSender;
