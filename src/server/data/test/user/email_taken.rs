use super::*;

/// Tests the email uniqueness check.
///
/// Expected: Ok(true) for a registered email unless it belongs to the excluded user
#[tokio::test]
async fn detects_registered_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            username: "mario".to_string(),
            email: "mario@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: Role::User,
        })
        .await?;

    assert!(repo.email_taken("mario@example.com", None).await?);
    assert!(!repo.email_taken("mario@example.com", Some(user.id)).await?);
    assert!(!repo.email_taken("luigi@example.com", None).await?);

    Ok(())
}
