pub mod send_bulk_email_service;

pub use send_bulk_email_service::SendBulkEmailService;
