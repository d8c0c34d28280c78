use super::*;

#[tokio::test]
async fn finds_college_ignoring_case_and_whitespace() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_college_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::college::create_college_with_name(db, "Stanford").await?;

    let repo = CollegeRepository::new(db);
    let found = repo.find_by_name("  sTaNfOrD ").await?.unwrap();

    assert_eq!(found.id, created.id);
    assert_eq!(found.name, "Stanford");

    Ok(())
}

#[tokio::test]
async fn returns_none_for_unknown_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_college_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::college::create_college_with_name(db, "Stanford").await?;

    let repo = CollegeRepository::new(db);

    assert!(repo.find_by_name("Stanford University").await?.is_none());

    Ok(())
}
