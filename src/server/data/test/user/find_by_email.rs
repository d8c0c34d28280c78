use super::*;

#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::create_user_with_email(db, "grace@example.com").await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_email("grace@example.com").await?.unwrap();

    assert_eq!(user.id, created.id);
    assert!(repo.exists_by_email("grace@example.com").await?);

    Ok(())
}

#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.find_by_email("ghost@example.com").await?.is_none());
    assert!(!repo.exists_by_email("ghost@example.com").await?);

    Ok(())
}
