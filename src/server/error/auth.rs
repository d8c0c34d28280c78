use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization` header.
    #[error("Missing Authorization header")]
    MissingToken,

    /// `Authorization` header present but not of the form `Bearer <token>`.
    #[error("Authorization header is not a bearer token")]
    MalformedHeader,

    /// Token signature was valid but `exp` has passed.
    #[error("Token has expired")]
    TokenExpired,

    /// Token failed signature or claim validation.
    #[error("Invalid token: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant maps to 401 Unauthorized. The detailed reason is logged at debug level
/// while the client only learns whether it must log in again.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        let message = match self {
            Self::MissingToken | Self::MalformedHeader => "Authentication required",
            Self::TokenExpired => "Token has expired, please log in again",
            Self::InvalidToken(_) => "Invalid authentication token",
        };

        (StatusCode::UNAUTHORIZED, Json(ErrorDto::new(message))).into_response()
    }
}
