//! Course fixtures for creating in-memory test data.

use entity::course;
use sea_orm::prelude::Decimal;

/// Default test course name.
pub const DEFAULT_NAME: &str = "Test Course";

/// Creates a course entity model for the given college and fee.
pub fn entity_with_fee(college_id: i32, fee: Decimal) -> course::Model {
    course::Model {
        id: 1,
        college_id,
        name: DEFAULT_NAME.to_string(),
        fee,
    }
}
