//! HTTP request handlers.
//!
//! Handlers validate request bodies into server-side params, call the matching service and
//! wrap the result in the `{data, message, status}` envelope. Failures are returned as
//! `AppError` and formatted by its `IntoResponse` implementation.

pub mod college;
pub mod health;
pub mod user;
