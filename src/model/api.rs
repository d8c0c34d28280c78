use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Value of the `status` field on successful responses.
pub const STATUS_SUCCESS: &str = "success";

/// Value of the `status` field on error responses.
pub const STATUS_ERROR: &str = "error";

/// Body returned for every failed request.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct ErrorDto {
    pub status: String,
    pub message: String,
}

impl ErrorDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR.to_string(),
            message: message.into(),
        }
    }
}

/// Envelope wrapping every successful response as `{data, message, status}`.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct ApiResponse<T> {
    pub data: T,
    pub message: String,
    pub status: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: message.into(),
            status: STATUS_SUCCESS.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct HealthDto {
    /// Whether the database answered a ping.
    pub database: bool,
}
