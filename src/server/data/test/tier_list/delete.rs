use super::*;

/// Tests that deleting a list removes its rows and their items.
///
/// Expected: Ok(true) and no rows or items left for the list
#[tokio::test]
async fn cascades_to_rows_and_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tier_list_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, games) = factory::helpers::create_user_with_games(db, 2).await?;
    let existing = factory::tier_list::TierListFactory::new(db, user.id)
        .row("S", 0, vec![(games[0].id, 0)])
        .row("A", 1, vec![(games[1].id, 0)])
        .build()
        .await?;

    let deleted = TierListRepository::new(db)
        .delete(existing.id, user.id)
        .await?;

    assert!(deleted);
    assert_eq!(TierList::find().count(db).await?, 0);
    assert_eq!(TierRow::find().count(db).await?, 0);
    assert_eq!(TierItem::find().count(db).await?, 0);
    // Referenced games are not owned by the list
    assert_eq!(Game::find().count(db).await?, 2);

    Ok(())
}

/// Tests that another user's list cannot be deleted.
///
/// Expected: Ok(false), with the list and its rows still present
#[tokio::test]
async fn returns_false_for_other_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tier_list_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, games) = factory::helpers::create_user_with_games(db, 1).await?;
    let intruder = factory::create_user(db).await?;
    let existing = factory::tier_list::TierListFactory::new(db, owner.id)
        .row("S", 0, vec![(games[0].id, 0)])
        .build()
        .await?;

    let deleted = TierListRepository::new(db)
        .delete(existing.id, intruder.id)
        .await?;

    assert!(!deleted);
    assert_eq!(TierList::find().count(db).await?, 1);
    assert_eq!(TierRow::find().count(db).await?, 1);
    assert_eq!(TierItem::find().count(db).await?, 1);

    Ok(())
}
