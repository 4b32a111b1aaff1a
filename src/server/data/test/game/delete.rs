use super::*;

/// Tests that deleting a game removes its tier list placements.
///
/// Rows of the tier list survive; only the items referencing the game disappear.
///
/// Expected: Ok(true) with the game's items removed
#[tokio::test]
async fn removes_tier_list_placements() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tier_list_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, games) = factory::helpers::create_user_with_games(db, 2).await?;
    factory::tier_list::TierListFactory::new(db, user.id)
        .row("S", 0, vec![(games[0].id, 0), (games[1].id, 1)])
        .build()
        .await?;

    let deleted = GameRepository::new(db).delete(games[0].id, user.id).await?;

    assert!(deleted);
    assert_eq!(Game::find().count(db).await?, 1);
    assert_eq!(TierRow::find().count(db).await?, 1);
    let items = TierItem::find().all(db).await?;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].game_id, games[1].id);

    Ok(())
}

/// Tests that another user's game cannot be deleted.
///
/// Expected: Ok(false), with the game still present
#[tokio::test]
async fn returns_false_for_other_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tier_list_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, games) = factory::helpers::create_user_with_games(db, 1).await?;
    let other = factory::create_user(db).await?;

    let deleted = GameRepository::new(db).delete(games[0].id, other.id).await?;

    assert!(!deleted);
    assert_eq!(Game::find().count(db).await?, 1);

    Ok(())
}
