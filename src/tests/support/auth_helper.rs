use std::sync::Arc;

use actix_web::web;
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::{
    IssuedToken, TokenClaims, TokenError, TokenProvider, SESSION_TOKEN_TTL_SECS,
};

/// Token provider that skips signing. `verify_token` accepts any string
/// and resolves it to a fixed user.
#[derive(Debug, Clone)]
pub struct StubTokenProvider {
    user_id: Uuid,
    failure: Option<TokenError>,
}

impl StubTokenProvider {
    pub const DEFAULT_USER_ID: Uuid = Uuid::from_u128(0x5eed_0000_0000_4000_8000_0000_0000_0001);

    pub fn valid() -> Self {
        Self::for_user(Self::DEFAULT_USER_ID)
    }

    pub fn for_user(user_id: Uuid) -> Self {
        Self {
            user_id,
            failure: None,
        }
    }

    pub fn failing(error: TokenError) -> Self {
        Self {
            user_id: Self::DEFAULT_USER_ID,
            failure: Some(error),
        }
    }
}

impl TokenProvider for StubTokenProvider {
    fn issue(&self, _user_id: Uuid) -> Result<IssuedToken, TokenError> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        Ok(IssuedToken {
            token: "stub-session-token".to_string(),
            expires_at: Utc::now() + Duration::seconds(SESSION_TOKEN_TTL_SECS),
        })
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        let now = Utc::now().timestamp();
        Ok(TokenClaims {
            sub: self.user_id,
            iss: "society-portal-test".to_string(),
            iat: now,
            nbf: now,
            exp: now + SESSION_TOKEN_TTL_SECS,
        })
    }
}

pub fn token_provider_data(
    stub: StubTokenProvider,
) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(stub);
    web::Data::new(provider)
}

pub fn bearer() -> (&'static str, &'static str) {
    ("Authorization", "Bearer test-token")
}
