//! College fixtures for creating in-memory test data.

use entity::college;

/// Default test college name.
pub const DEFAULT_NAME: &str = "Test College";

/// Default test college location.
pub const DEFAULT_LOCATION: &str = "Test City";

/// Creates a college entity model with default values.
pub fn entity() -> college::Model {
    college::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        name_key: DEFAULT_NAME.to_lowercase(),
        location: DEFAULT_LOCATION.to_string(),
    }
}
