use super::*;
use chrono::{Duration, Utc};

/// Tests that a user's lists come back newest first.
///
/// Expected: Ok with lists ordered by creation time descending
#[tokio::test]
async fn orders_lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tier_list_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let now = Utc::now();
    for (name, age_days) in [("Old", 3), ("Newest", 0), ("Middle", 1)] {
        factory::tier_list::TierListFactory::new(db, user.id)
            .name(name)
            .created_at(now - Duration::days(age_days))
            .build()
            .await?;
    }

    let lists = TierListRepository::new(db).get_all_by_user(user.id).await?;

    let names: Vec<&str> = lists.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Newest", "Middle", "Old"]);

    Ok(())
}

/// Tests that only the caller's lists are returned.
///
/// Expected: Ok with lists of other users excluded
#[tokio::test]
async fn excludes_other_users_lists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tier_list_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let mine = factory::create_tier_list(db, user.id).await?;
    factory::create_tier_list(db, other.id).await?;

    let lists = TierListRepository::new(db).get_all_by_user(user.id).await?;

    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0].id, mine.id);

    Ok(())
}
