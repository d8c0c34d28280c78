use super::*;

/// Tests deleting an existing user by email.
///
/// Expected: Ok(1) and the user is gone
#[tokio::test]
async fn deletes_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let deleted = repo.delete_by_email(&user.email).await?;

    assert_eq!(deleted, 1);
    assert!(repo.find_by_email(&user.email).await?.is_none());
    assert!(repo.find_by_email(&other.email).await?.is_some());

    Ok(())
}

/// Tests deleting an email that is not registered.
///
/// Expected: Ok(0) with the table unchanged
#[tokio::test]
async fn deletes_nothing_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let deleted = repo.delete_by_email("nobody@example.com").await?;

    assert_eq!(deleted, 0);
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}
