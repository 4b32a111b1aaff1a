use super::*;

/// Tests creating a tier list with rows and items.
///
/// Verifies that the list, its rows and their items are persisted together and returned
/// hydrated, with each item carrying its game.
///
/// Expected: Ok with the full structure
#[tokio::test]
async fn creates_tier_list_with_structure() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tier_list_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, games) = factory::helpers::create_user_with_games(db, 2).await?;

    let repo = TierListRepository::new(db);
    let list = repo
        .create(
            user.id,
            param(
                "Favourites",
                vec![
                    row("S", 0, vec![(games[0].id, 0)]),
                    row("A", 1, vec![(games[1].id, 0)]),
                ],
            ),
        )
        .await?;

    assert_eq!(list.name, "Favourites");
    assert_eq!(list.user_id, user.id);
    assert_eq!(list.rows.len(), 2);
    assert_eq!(list.rows[0].label, "S");
    assert_eq!(list.rows[0].tier_list_id, list.id);
    assert_eq!(list.rows[0].items[0].game_id, games[0].id);
    assert_eq!(list.rows[0].items[0].tier_row_id, list.rows[0].id);
    assert_eq!(
        list.rows[0].items[0].game.as_ref().map(|g| g.id),
        Some(games[0].id)
    );
    assert_eq!(TierItem::find().count(db).await?, 2);

    Ok(())
}

/// Tests creating a tier list without rows.
///
/// Expected: Ok with an empty row list
#[tokio::test]
async fn creates_empty_tier_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tier_list_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let list = TierListRepository::new(db)
        .create(user.id, param("Empty", vec![]))
        .await?;

    assert!(list.rows.is_empty());
    assert_eq!(TierList::find().count(db).await?, 1);

    Ok(())
}

/// Tests that a failed create leaves nothing behind.
///
/// Verifies that when an item references a game that does not exist, the insert fails
/// and neither the list nor any of its rows are persisted.
///
/// Expected: Err and no tier list rows in the database
#[tokio::test]
async fn persists_nothing_when_item_references_missing_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tier_list_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = TierListRepository::new(db)
        .create(
            user.id,
            param("Broken", vec![row("S", 0, vec![(Uuid::new_v4(), 0)])]),
        )
        .await;

    assert!(result.is_err());
    assert_eq!(TierList::find().count(db).await?, 0);
    assert_eq!(TierRow::find().count(db).await?, 0);
    assert_eq!(TierItem::find().count(db).await?, 0);

    Ok(())
}
