use super::*;

use crate::server::util::db::is_unique_violation;
use sea_orm::EntityTrait;

/// Tests inserting a college trims its name and location.
#[tokio::test]
async fn creates_college_with_trimmed_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_college_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CollegeRepository::new(db);
    let college = repo
        .create(CreateCollegeParam {
            name: "  MIT ".to_string(),
            location: " Cambridge ".to_string(),
        })
        .await?;

    assert_eq!(college.name, "MIT");
    assert_eq!(college.location, "Cambridge");

    let stored = entity::prelude::College::find_by_id(college.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name_key, "mit");

    Ok(())
}

/// Tests that the store itself rejects a case-insensitive duplicate name.
///
/// Expected: Err recognised as a unique violation
#[tokio::test]
async fn store_rejects_case_insensitive_duplicate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_college_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::college::create_college_with_name(db, "MIT").await?;

    let repo = CollegeRepository::new(db);
    let err = repo
        .create(CreateCollegeParam {
            name: "mit".to_string(),
            location: "Elsewhere".to_string(),
        })
        .await
        .unwrap_err();

    assert!(is_unique_violation(&err));
    assert_eq!(repo.count().await?, 1);

    Ok(())
}
