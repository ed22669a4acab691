use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use std::fmt;

use crate::auth::application::ports::outgoing::{TokenClaims, TokenError, TokenVerifier};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());
        Self {
            config,
            decoding_key,
        }
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.set_issuer(&[&self.config.issuer]);
        validation
    }
}

fn classify(kind: &ErrorKind) -> TokenError {
    match kind {
        ErrorKind::ExpiredSignature => {
            tracing::debug!("Token verification failed: Token expired");
            TokenError::TokenExpired
        }
        ErrorKind::ImmatureSignature => {
            tracing::warn!("Token verification failed: Token not yet valid");
            TokenError::TokenNotYetValid
        }
        ErrorKind::InvalidSignature => {
            tracing::error!("Security alert: Invalid token signature detected");
            TokenError::InvalidSignature
        }
        ErrorKind::InvalidToken | ErrorKind::InvalidAlgorithm => {
            tracing::error!("Security alert: Malformed or invalid algorithm token");
            TokenError::MalformedToken
        }
        ErrorKind::InvalidIssuer => {
            tracing::warn!("Token verification failed: Unknown issuer");
            TokenError::MalformedToken
        }
        _ => {
            tracing::warn!("Token verification failed: Malformed token");
            TokenError::MalformedToken
        }
    }
}

impl TokenVerifier for JwtTokenService {
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation())
            .map(|decoded| decoded.claims)
            .map_err(|e| classify(e.kind()))
    }
}
