use super::*;

#[tokio::test]
async fn creates_trimmed_college() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_college_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let college = CollegeService::new(db)
        .create_without_courses(CreateCollegeParam {
            name: " MIT ".to_string(),
            location: " Cambridge".to_string(),
        })
        .await?;

    assert_eq!(college.name, "MIT");
    assert_eq!(college.location, "Cambridge");

    Ok(())
}

/// Tests creating "MIT" and then "mit".
///
/// Verifies the name comparison ignores case and the second request never produces a
/// second college row.
///
/// Expected: Err(AppError::Conflict) with one college stored
#[tokio::test]
async fn rejects_case_insensitive_duplicate() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_college_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CollegeService::new(db);
    service
        .create_without_courses(CreateCollegeParam {
            name: "MIT".to_string(),
            location: "Cambridge".to_string(),
        })
        .await?;

    let result = service
        .create_without_courses(CreateCollegeParam {
            name: "mit".to_string(),
            location: "Boston".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::Conflict(ref msg)) if msg == "College with this name already exists"
    ));
    assert_eq!(service.get_all().await?.len(), 1);

    Ok(())
}

/// Tests eight concurrent requests for the same new college over separate connections.
///
/// Requests that pass the name lookup together race on the insert, where the unique
/// `name_key` constraint decides the winner.
///
/// Expected: exactly one Ok, every other request Err(AppError::Conflict), one college stored
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_duplicates_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_college_tables()
        .with_file_database("concurrent_create_without_courses")
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let db = db.clone();
            tokio::spawn(async move {
                CollegeService::new(&db)
                    .create_without_courses(CreateCollegeParam {
                        name: if i % 2 == 0 { "Harvard" } else { "harvard" }.to_string(),
                        location: "Cambridge".to_string(),
                    })
                    .await
            })
        })
        .collect();

    let mut created = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => created += 1,
            Err(AppError::Conflict(msg)) => {
                assert_eq!(msg, "College with this name already exists");
                conflicts += 1;
            }
            Err(err) => panic!("unexpected error: {}", err),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(conflicts, 7);
    assert_eq!(CollegeService::new(db).get_all().await?.len(), 1);

    Ok(())
}
