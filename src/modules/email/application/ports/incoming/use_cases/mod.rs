pub mod send_bulk_email;

pub use send_bulk_email::{
    BulkEmailReport, FailedDelivery, SendBulkEmailCommand, SendBulkEmailError,
    SendBulkEmailUseCase,
};
