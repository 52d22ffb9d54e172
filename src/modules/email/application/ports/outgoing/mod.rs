pub mod email_sender;
pub mod recipient_query;

pub use email_sender::{EmailSendError, EmailSender};
pub use recipient_query::{Recipient, RecipientQuery, RecipientQueryError};
