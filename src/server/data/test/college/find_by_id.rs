use super::*;

#[tokio::test]
async fn finds_college_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_college_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::college::create_college(db).await?;

    let repo = CollegeRepository::new(db);
    let found = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(found.name, created.name);
    assert_eq!(found.location, created.location);
    assert!(repo.find_by_id(created.id + 1).await?.is_none());

    Ok(())
}
