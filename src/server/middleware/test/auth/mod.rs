use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Claims, TokenVerifier},
};


const SECRET: &str = "test-secret";

fn token(secret: &str, exp: i64) -> String {
    let claims = Claims {
        sub: "tester".to_string(),
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
