//! User fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::user;

/// Default test user name.
pub const DEFAULT_NAME: &str = "Test User";

/// Default test user email.
pub const DEFAULT_EMAIL: &str = "test.user@example.com";

/// Creates a user entity model with default values.
///
/// `created_at` is fixed at 2025-01-01T00:00:00Z so serialized output is stable.
pub fn entity() -> user::Model {
    user::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        email: DEFAULT_EMAIL.to_string(),
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
    }
}
