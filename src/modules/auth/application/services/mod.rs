mod credential_store;
pub mod password;

pub use credential_store::CredentialStore;
