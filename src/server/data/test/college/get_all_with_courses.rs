use super::*;

use test_utils::factory::course::CourseFactory;

/// Tests that the join yields one row per course, carrying the college fields.
#[tokio::test]
async fn returns_one_row_per_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_college_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let college = factory::college::CollegeFactory::new(db)
        .name("MIT")
        .location("Cambridge")
        .build()
        .await?;
    CourseFactory::new(db, college.id)
        .name("CS")
        .fee(Decimal::from(100))
        .build()
        .await?;
    CourseFactory::new(db, college.id)
        .name("EE")
        .fee(Decimal::new(25050, 2))
        .build()
        .await?;

    let rows = CollegeRepository::new(db).get_all_with_courses().await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].college_id, college.id);
    assert_eq!(rows[0].college_name, "MIT");
    assert_eq!(rows[0].location, "Cambridge");
    assert_eq!(rows[0].course, "CS");
    assert_eq!(rows[0].fee, Decimal::from(100));
    assert_eq!(rows[1].course, "EE");
    assert_eq!(rows[1].fee, Decimal::new(25050, 2));

    Ok(())
}

/// Tests that a college without courses is left out of the inner join.
#[tokio::test]
async fn omits_colleges_without_courses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_college_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (with_course, _) = factory::helpers::create_college_with_course(db).await?;
    factory::college::create_college(db).await?;

    let rows = CollegeRepository::new(db).get_all_with_courses().await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].college_id, with_course.id);

    Ok(())
}
