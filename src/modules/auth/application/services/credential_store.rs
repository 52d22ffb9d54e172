use std::sync::Arc;

use crate::auth::application::domain::entities::HashedPassword;
use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};

/// Well-formed Argon2id hash at the default cost that matches no password.
const DECOY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$al5e+Cv3WW/R3gE0gRtgMg$yAlnFjhxvI0u4uI1Es9lsFd81li4HsTZAVsBeanMtW4";

/// Write and check path for user secrets.
///
/// Hashing happens only through `set_password`; nothing in the persistence
/// layer hashes implicitly.
#[derive(Clone)]
pub struct CredentialStore {
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl CredentialStore {
    pub fn new(hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self { hasher }
    }

    pub async fn set_password(&self, plaintext: &str) -> Result<HashedPassword, HashError> {
        let hash = self.hasher.hash_password(plaintext).await?;
        Ok(HashedPassword::from_stored(hash))
    }

    /// Mismatch, a malformed stored hash and a failed worker all read as `false`.
    pub async fn verify(&self, plaintext: &str, stored: &HashedPassword) -> bool {
        match self.hasher.verify_password(plaintext, stored.as_str()).await {
            Ok(matches) => matches,
            Err(e) => {
                tracing::warn!(error = %e, "Stored password hash could not be verified");
                false
            }
        }
    }

    /// Spends one verification on a decoy hash so an unknown account costs
    /// the same as a wrong password.
    pub async fn verify_decoy(&self, plaintext: &str) {
        let _ = self.hasher.verify_password(plaintext, DECOY_HASH).await;
    }

    /// Returns `current` untouched unless a new secret is supplied.
    pub async fn apply_password_change(
        &self,
        current: &HashedPassword,
        new_plaintext: Option<&str>,
    ) -> Result<HashedPassword, HashError> {
        match new_plaintext {
            Some(plaintext) => self.set_password(plaintext).await,
            None => Ok(current.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::security::Argon2Hasher;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingHasher {
        hash_calls: AtomicUsize,
        verify_calls: AtomicUsize,
        verify_result: Result<bool, HashError>,
        hash_result: Result<String, HashError>,
    }

    impl CountingHasher {
        fn new() -> Self {
            Self {
                hash_calls: AtomicUsize::new(0),
                verify_calls: AtomicUsize::new(0),
                verify_result: Ok(true),
                hash_result: Ok("$argon2id$fresh".to_string()),
            }
        }
    }

    #[async_trait]
    impl PasswordHasher for CountingHasher {
        async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
            self.hash_calls.fetch_add(1, Ordering::SeqCst);
            self.hash_result.clone()
        }

        async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
            self.verify_calls.fetch_add(1, Ordering::SeqCst);
            self.verify_result.clone()
        }
    }

    fn fast_argon2() -> CredentialStore {
        CredentialStore::new(Arc::new(Argon2Hasher::with_params(1024, 1, 1).unwrap()))
    }

    #[tokio::test]
    async fn set_password_then_verify_round_trip() {
        let store = fast_argon2();

        let hash = store.set_password("correct horse battery").await.unwrap();

        assert!(hash.as_str().starts_with("$argon2id$"));
        assert!(store.verify("correct horse battery", &hash).await);
        assert!(!store.verify("wrong horse battery", &hash).await);
    }

    #[tokio::test]
    async fn same_password_gets_distinct_salts() {
        let store = fast_argon2();

        let first = store.set_password("same-secret").await.unwrap();
        let second = store.set_password("same-secret").await.unwrap();

        assert_ne!(first, second);
        assert!(store.verify("same-secret", &first).await);
        assert!(store.verify("same-secret", &second).await);
    }

    #[tokio::test]
    async fn malformed_stored_hash_verifies_false() {
        let store = fast_argon2();
        let stored = HashedPassword::from_stored("not-a-phc-string".to_string());

        assert!(!store.verify("anything", &stored).await);
    }

    #[tokio::test]
    async fn decoy_hash_is_a_real_argon2_hash_that_matches_nothing() {
        let store = fast_argon2();
        let decoy = HashedPassword::from_stored(DECOY_HASH.to_string());

        assert!(!store.verify("analytical-engine", &decoy).await);
        assert!(argon2::PasswordHash::new(DECOY_HASH).is_ok());
    }

    #[tokio::test]
    async fn decoy_verification_runs_the_hasher() {
        let hasher = Arc::new(CountingHasher::new());
        let store = CredentialStore::new(hasher.clone());

        store.verify_decoy("anything").await;

        assert_eq!(hasher.verify_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn verify_error_is_reported_as_mismatch() {
        let mut hasher = CountingHasher::new();
        hasher.verify_result = Err(HashError::TaskFailed);
        let store = CredentialStore::new(Arc::new(hasher));

        let stored = HashedPassword::from_stored("$argon2id$x".to_string());
        assert!(!store.verify("secret", &stored).await);
    }

    #[tokio::test]
    async fn no_new_password_keeps_hash_without_hashing() {
        let hasher = Arc::new(CountingHasher::new());
        let store = CredentialStore::new(hasher.clone());
        let current = HashedPassword::from_stored("$argon2id$existing".to_string());

        let result = store.apply_password_change(&current, None).await.unwrap();

        assert_eq!(result.as_str(), "$argon2id$existing");
        assert_eq!(hasher.hash_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn new_password_is_rehashed() {
        let hasher = Arc::new(CountingHasher::new());
        let store = CredentialStore::new(hasher.clone());
        let current = HashedPassword::from_stored("$argon2id$existing".to_string());

        let result = store
            .apply_password_change(&current, Some("brand-new-secret"))
            .await
            .unwrap();

        assert_eq!(result.as_str(), "$argon2id$fresh");
        assert_eq!(hasher.hash_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn hashing_failure_propagates() {
        let mut hasher = CountingHasher::new();
        hasher.hash_result = Err(HashError::HashFailed);
        let store = CredentialStore::new(Arc::new(hasher));

        let result = store.set_password("secret-value").await;
        assert_eq!(result.unwrap_err(), HashError::HashFailed);
    }
}
