use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::{TokenClaims, TokenVerifier};
use crate::tests::support::load_test_env;

pub fn test_jwt_config() -> JwtConfig {
    load_test_env();
    JwtConfig {
        secret_key: std::env::var("TEST_JWT_SECRET")
            .unwrap_or_else(|_| "FAKE_JWT_SECRET_DO_NOT_USE_IN_PRODUCTION".to_string()),
        issuer: "test_issuer".to_string(),
    }
}

/// Shape of a token minted for tests. Offsets are seconds from now.
#[derive(Debug, Clone)]
pub struct TokenSpec {
    pub sub: Uuid,
    pub token_type: String,
    pub expires_in: i64,
    pub not_before_in: i64,
}

impl TokenSpec {
    pub fn access() -> Self {
        Self {
            sub: Uuid::new_v4(),
            token_type: "access".to_string(),
            expires_in: 3600,
            not_before_in: 0,
        }
    }
}

pub fn mint_token(config: &JwtConfig, spec: &TokenSpec) -> String {
    let now = Utc::now();
    let claims = TokenClaims {
        sub: spec.sub,
        iss: config.issuer.clone(),
        exp: (now + Duration::seconds(spec.expires_in)).timestamp(),
        iat: now.timestamp(),
        nbf: (now + Duration::seconds(spec.not_before_in)).timestamp(),
        token_type: spec.token_type.clone(),
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret_key.as_bytes()),
    )
    .expect("test token should encode")
}

/// `Authorization` header value for a token signed with the test config.
pub fn bearer(spec: &TokenSpec) -> String {
    format!("Bearer {}", mint_token(&test_jwt_config(), spec))
}

pub fn admin_bearer() -> String {
    bearer(&TokenSpec::access())
}

pub fn token_verifier() -> Arc<dyn TokenVerifier + Send + Sync> {
    Arc::new(JwtTokenService::new(test_jwt_config()))
}
