use super::*;

/// Tests pagination with multiple pages.
///
/// Verifies that the repository returns the requested page of users ordered by
/// username together with the total user count.
///
/// Expected: Ok with the correct page and total
#[tokio::test]
async fn returns_requested_page_ordered_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["zelda", "alice", "mike", "bob", "carol"] {
        factory::user::UserFactory::new(db)
            .username(name)
            .email(format!("{}@example.com", name))
            .build()
            .await?;
    }

    let repo = UserRepository::new(db);
    let (first, total) = repo.get_all_paginated(0, 2).await?;
    assert_eq!(total, 5);
    let names: Vec<&str> = first.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["alice", "bob"]);

    let (last, _) = repo.get_all_paginated(2, 2).await?;
    assert_eq!(last.len(), 1);
    assert_eq!(last[0].username, "zelda");

    Ok(())
}

/// Tests pagination with no users.
///
/// Expected: Ok with an empty page and zero total
#[tokio::test]
async fn returns_empty_for_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (users, total) = UserRepository::new(db).get_all_paginated(0, 10).await?;

    assert!(users.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
