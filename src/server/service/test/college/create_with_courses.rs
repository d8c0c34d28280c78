use super::*;

/// Tests creating a new college with one course, then reading it back through the join.
///
/// Expected: Created outcome with the persisted course, and a joined row
/// `{course: "CS", fee: 100}` for that college
#[tokio::test]
async fn creates_college_and_courses() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_college_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CollegeService::new(db);
    let creation = service
        .create_with_courses(CreateCollegeWithCoursesParam {
            name: "MIT".to_string(),
            location: "Cambridge".to_string(),
            courses: vec![new_course("CS", 100)],
        })
        .await?;

    let CollegeCreation::Created { college, courses } = creation else {
        panic!("expected a new college");
    };
    assert_eq!(college.name, "MIT");
    assert_eq!(courses.len(), 1);
    assert!(courses[0].id > 0);
    assert_eq!(courses[0].college_id, college.id);

    let rows = service.get_all_with_courses().await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].college_id, college.id);
    assert_eq!(rows[0].course, "CS");
    assert_eq!(rows[0].fee, Decimal::from(100));

    Ok(())
}

/// Tests submitting the same college twice with different courses.
///
/// Expected: AddedToExisting on the second call, one college holding both courses
#[tokio::test]
async fn adds_courses_to_existing_college() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_college_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::college::create_college_with_name(db, "MIT").await?;

    let service = CollegeService::new(db);
    let creation = service
        .create_with_courses(CreateCollegeWithCoursesParam {
            name: "mit".to_string(),
            location: "Somewhere".to_string(),
            courses: vec![new_course("CS", 100), new_course("EE", 200)],
        })
        .await?;

    assert_eq!(creation.message(), "Course added to existing college");
    let CollegeCreation::AddedToExisting { college, courses } = creation else {
        panic!("expected the existing college");
    };
    assert_eq!(college.id, existing.id);
    assert_eq!(college.location, existing.location);
    let names: Vec<&str> = courses.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["CS", "EE"]);

    assert_eq!(service.get_all().await?.len(), 1);
    assert_eq!(service.get_all_with_courses().await?.len(), 2);

    Ok(())
}

/// Tests that a failing course insert rolls back the new college as well.
///
/// The courses table is missing, so the first course insert fails after the college
/// insert succeeded inside the same transaction.
///
/// Expected: Err(AppError::DbErr) and no college stored
#[tokio::test]
async fn rolls_back_college_when_course_insert_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::College)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CollegeService::new(db);
    let result = service
        .create_with_courses(CreateCollegeWithCoursesParam {
            name: "MIT".to_string(),
            location: "Cambridge".to_string(),
            courses: vec![new_course("CS", 100)],
        })
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    assert!(matches!(
        service.get_all().await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests the insert path after the name lookup missed, when the name is already taken.
///
/// This is the state a request is in after losing a race to a concurrent request that
/// created the same college first.
///
/// Expected: the existing college with `false`, and the outer transaction still accepts
/// the course insert and commits
#[tokio::test]
async fn create_or_find_falls_back_to_existing_college() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_college_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::college::create_college_with_name(db, "MIT").await?;

    let txn = db.begin().await?;
    let (college, created) = create_or_find_college(
        &txn,
        CreateCollegeParam {
            name: "mit".to_string(),
            location: "Boston".to_string(),
        },
    )
    .await?;

    assert!(!created);
    assert_eq!(college.id, existing.id);

    CourseRepository::new(&txn)
        .create(CreateCourseParam {
            college_id: college.id,
            name: "CS".to_string(),
            fee: Decimal::from(100),
        })
        .await?;
    txn.commit().await?;

    let rows = CollegeService::new(db).get_all_with_courses().await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].college_id, existing.id);
    assert_eq!(rows[0].college_name, "MIT");

    Ok(())
}

/// Tests eight concurrent submissions of the same new college over separate connections.
///
/// SQLite may refuse some of the racing transactions outright. Every request that does
/// succeed must land its course on the single college row.
///
/// Expected: one college, exactly one Created outcome, one stored course per success
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_share_one_college() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_college_tables()
        .with_file_database("concurrent_create_with_courses")
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let db = db.clone();
            tokio::spawn(async move {
                CollegeService::new(&db)
                    .create_with_courses(CreateCollegeWithCoursesParam {
                        name: "MIT".to_string(),
                        location: "Cambridge".to_string(),
                        courses: vec![new_course(&format!("Course {}", i), 100)],
                    })
                    .await
            })
        })
        .collect();

    let mut created = 0;
    let mut college_ids = Vec::new();
    let mut stored_courses = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(CollegeCreation::Created { college, courses }) => {
                created += 1;
                college_ids.push(college.id);
                stored_courses += courses.len();
            }
            Ok(CollegeCreation::AddedToExisting { college, courses }) => {
                college_ids.push(college.id);
                stored_courses += courses.len();
            }
            Err(err) => assert!(
                matches!(err, AppError::DbErr(_) | AppError::Conflict(_)),
                "unexpected error: {}",
                err
            ),
        }
    }

    let colleges = CollegeService::new(db).get_all().await?;
    assert_eq!(colleges.len(), 1);
    assert_eq!(created, 1);
    assert!(college_ids.iter().all(|id| *id == colleges[0].id));
    assert_eq!(
        CollegeService::new(db).get_all_with_courses().await?.len(),
        stored_courses
    );

    Ok(())
}
