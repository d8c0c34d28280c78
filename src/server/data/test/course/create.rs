use super::*;

use sea_orm::{EntityTrait, PaginatorTrait};

use crate::server::util::db::is_foreign_key_violation;

#[tokio::test]
async fn creates_course_for_existing_college() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_college_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let college = factory::college::create_college(db).await?;

    let repo = CourseRepository::new(db);
    let course = repo
        .create(CreateCourseParam {
            college_id: college.id,
            name: " Physics ".to_string(),
            fee: Decimal::new(99950, 2),
        })
        .await?;

    assert_eq!(course.college_id, college.id);
    assert_eq!(course.name, "Physics");
    assert_eq!(course.fee, Decimal::new(99950, 2));
    let stored = entity::prelude::Course::find_by_id(course.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.college_id, college.id);
    assert_eq!(stored.name, "Physics");

    Ok(())
}

/// Tests referential integrity on `college_id`.
///
/// Expected: Err recognised as a foreign key violation, nothing inserted
#[tokio::test]
async fn rejects_unknown_college_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_college_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CourseRepository::new(db);
    let err = repo
        .create(CreateCourseParam {
            college_id: 4242,
            name: "Ghost".to_string(),
            fee: Decimal::from(1),
        })
        .await
        .unwrap_err();

    assert!(is_foreign_key_violation(&err));
    assert_eq!(entity::prelude::Course::find().count(db).await?, 0);

    Ok(())
}
