mod send_bulk_email;

pub use send_bulk_email::{
    __path_send_bulk_email_handler, send_bulk_email_handler, BulkEmailResponse,
    FailedDeliveryResponse, SendBulkEmailBody,
};
