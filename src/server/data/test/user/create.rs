use super::*;

use crate::server::util::db::is_unique_violation;

/// Tests inserting a new user.
///
/// Expected: Ok with the persisted row, including a generated ID
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.name, "Ada");
    assert_eq!(user.email, "ada@example.com");

    Ok(())
}

/// Tests that the schema-level unique constraint on email rejects a duplicate.
///
/// Expected: Err recognised as a unique violation, and no second row
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_email(db, "dup@example.com").await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            name: "Other".to_string(),
            email: "dup@example.com".to_string(),
        })
        .await;

    let err = result.unwrap_err();
    assert!(is_unique_violation(&err));
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}
