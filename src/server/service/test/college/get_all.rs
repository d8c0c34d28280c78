use super::*;

/// Tests listing colleges when none exist.
///
/// Expected: Err(AppError::NotFound("No colleges found"))
#[tokio::test]
async fn no_colleges_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_college_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CollegeService::new(db).get_all().await;

    assert!(matches!(result, Err(AppError::NotFound(ref msg)) if msg == "No colleges found"));

    Ok(())
}

#[tokio::test]
async fn returns_colleges_ordered_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_college_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::college::create_college(db).await?;
    let second = factory::college::create_college(db).await?;

    let colleges = CollegeService::new(db).get_all().await?;

    let ids: Vec<i32> = colleges.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests the joined listing when colleges exist but none has a course.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn with_courses_is_not_found_without_courses() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_college_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::college::create_college(db).await?;

    let result = CollegeService::new(db).get_all_with_courses().await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
