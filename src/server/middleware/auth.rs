use axum::http::{header::AUTHORIZATION, HeaderMap};
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, AppError};

/// Claims carried by an accepted bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject the token was issued to
    pub sub: String,
    /// Expiration timestamp (Unix epoch seconds)
    pub exp: i64,
}

/// Verifies HS256 tokens signed with the configured secret.
///
/// Tokens without an `exp` claim are rejected.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken(e),
            }
        })?;

        Ok(data.claims)
    }
}

pub struct AuthGuard<'a> {
    verifier: &'a TokenVerifier,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(verifier: &'a TokenVerifier, headers: &'a HeaderMap) -> Self {
        Self { verifier, headers }
    }

    /// Requires a valid `Authorization: Bearer <token>` header.
    pub fn require(&self) -> Result<Claims, AppError> {
        let Some(header) = self.headers.get(AUTHORIZATION) else {
            return Err(AuthError::MissingToken.into());
        };

        let token = header
            .to_str()
            .ok()
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MalformedHeader)?;

        Ok(self.verifier.verify(token)?)
    }
}
