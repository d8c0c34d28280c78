//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for generating unique names and
/// emails across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a college with a single default course.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((college, course))` - Both created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_college_with_course(
    db: &DatabaseConnection,
) -> Result<(entity::college::Model, entity::course::Model), DbErr> {
    let college = crate::factory::college::create_college(db).await?;
    let course = crate::factory::course::create_course(db, college.id).await?;

    Ok((college, course))
}
