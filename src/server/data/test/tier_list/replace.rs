use super::*;

/// Tests that replace stores rows and items in the submitted order.
///
/// Rows S(0) and A(1) with items G1(0), G2(1) in S must read back as S, A and G1, G2.
///
/// Expected: Ok(Some) with rows and items ordered by sort order
#[tokio::test]
async fn orders_rows_and_items_by_sort_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tier_list_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, games) = factory::helpers::create_user_with_games(db, 2).await?;
    let existing = factory::create_tier_list(db, user.id).await?;

    let repo = TierListRepository::new(db);
    repo.replace(
        existing.id,
        user.id,
        param(
            "Ranked",
            vec![
                row("A", 1, vec![]),
                row("S", 0, vec![(games[1].id, 1), (games[0].id, 0)]),
            ],
        ),
    )
    .await?;

    let list = repo.get_by_id(existing.id, user.id).await?.unwrap();
    let labels: Vec<&str> = list.rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["S", "A"]);

    let game_ids: Vec<Uuid> = list.rows[0].items.iter().map(|i| i.game_id).collect();
    assert_eq!(game_ids, vec![games[0].id, games[1].id]);
    assert!(list.rows[1].items.is_empty());

    Ok(())
}

/// Tests that rows sharing a sort order keep their submission order.
///
/// Expected: Ok(Some) with tied rows in the order they were sent
#[tokio::test]
async fn keeps_submission_order_for_tied_sort_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tier_list_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, games) = factory::helpers::create_user_with_games(db, 3).await?;
    let existing = factory::create_tier_list(db, user.id).await?;

    let list = TierListRepository::new(db)
        .replace(
            existing.id,
            user.id,
            param(
                "Ties",
                vec![
                    row("Second", 0, vec![]),
                    row("First", 0, vec![]),
                    row(
                        "Third",
                        0,
                        vec![(games[2].id, 0), (games[0].id, 0), (games[1].id, 0)],
                    ),
                ],
            ),
        )
        .await?
        .unwrap();

    let labels: Vec<&str> = list.rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["Second", "First", "Third"]);

    let game_ids: Vec<Uuid> = list.rows[2].items.iter().map(|i| i.game_id).collect();
    assert_eq!(game_ids, vec![games[2].id, games[0].id, games[1].id]);

    Ok(())
}

/// Tests that every replace generates new row and item identities.
///
/// Replacing a list with the same logical structure must not reuse any of the
/// previous row or item ids.
///
/// Expected: Ok(Some) with disjoint id sets before and after
#[tokio::test]
async fn regenerates_row_and_item_identities() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tier_list_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, games) = factory::helpers::create_user_with_games(db, 1).await?;
    let repo = TierListRepository::new(db);
    let structure = || param("Same", vec![row("S", 0, vec![(games[0].id, 0)])]);

    let before = repo.create(user.id, structure()).await?;
    let after = repo.replace(before.id, user.id, structure()).await?.unwrap();

    assert_eq!(after.id, before.id);
    assert_ne!(after.rows[0].id, before.rows[0].id);
    assert_ne!(after.rows[0].items[0].id, before.rows[0].items[0].id);
    assert_eq!(after.rows[0].items[0].tier_row_id, after.rows[0].id);
    assert_eq!(TierRow::find().count(db).await?, 1);
    assert_eq!(TierItem::find().count(db).await?, 1);

    Ok(())
}

/// Tests replacing a populated list with no rows.
///
/// Expected: Ok(Some) with zero rows and no leftover items in the database
#[tokio::test]
async fn empty_rows_clear_structure() -> Result<(), DbErr> {
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

    let list = TierListRepository::new(db)
        .replace(existing.id, user.id, param("Cleared", vec![]))
        .await?
        .unwrap();

    assert!(list.rows.is_empty());
    assert_eq!(list.name, "Cleared");
    assert_eq!(TierRow::find().count(db).await?, 0);
    assert_eq!(TierItem::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a failing replace rolls back completely.
///
/// The new structure references a game that does not exist, so inserting its items
/// fails after the old rows were already deleted inside the transaction. The name,
/// rows and items must be exactly as before the call.
///
/// Expected: Err, with the previous structure intact
#[tokio::test]
async fn failed_replace_leaves_previous_state() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tier_list_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, games) = factory::helpers::create_user_with_games(db, 2).await?;
    let existing = factory::tier_list::TierListFactory::new(db, user.id)
        .name("Original")
        .row("S", 0, vec![(games[0].id, 0), (games[1].id, 1)])
        .build()
        .await?;

    let repo = TierListRepository::new(db);
    let before = repo.get_by_id(existing.id, user.id).await?.unwrap();

    let result = repo
        .replace(
            existing.id,
            user.id,
            param(
                "Renamed",
                vec![row("A", 0, vec![(games[0].id, 0), (Uuid::new_v4(), 1)])],
            ),
        )
        .await;
    assert!(result.is_err());

    let after = repo.get_by_id(existing.id, user.id).await?.unwrap();
    assert_eq!(after.name, "Original");
    assert_eq!(after.updated_at, before.updated_at);
    assert_eq!(after.rows.len(), 1);
    assert_eq!(after.rows[0].id, before.rows[0].id);
    let item_ids: Vec<Uuid> = after.rows[0].items.iter().map(|i| i.id).collect();
    let previous_ids: Vec<Uuid> = before.rows[0].items.iter().map(|i| i.id).collect();
    assert_eq!(item_ids, previous_ids);

    Ok(())
}

/// Tests that another user's list cannot be replaced.
///
/// Expected: Ok(None), with the owner's list unchanged
#[tokio::test]
async fn returns_none_for_other_users_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tier_list_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, games) = factory::helpers::create_user_with_games(db, 1).await?;
    let intruder = factory::create_user(db).await?;
    let existing = factory::tier_list::TierListFactory::new(db, owner.id)
        .name("Mine")
        .row("S", 0, vec![(games[0].id, 0)])
        .build()
        .await?;

    let repo = TierListRepository::new(db);
    let result = repo
        .replace(existing.id, intruder.id, param("Stolen", vec![]))
        .await?;
    assert!(result.is_none());

    let list = repo.get_by_id(existing.id, owner.id).await?.unwrap();
    assert_eq!(list.name, "Mine");
    assert_eq!(list.rows.len(), 1);
    assert_eq!(list.rows[0].items.len(), 1);

    Ok(())
}

/// Tests replacing a list that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tier_list_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = TierListRepository::new(db)
        .replace(Uuid::new_v4(), user.id, param("Nothing", vec![]))
        .await?;

    assert!(result.is_none());
    assert_eq!(TierList::find().count(db).await?, 0);

    Ok(())
}

/// Tests that replace only touches the target list.
///
/// Expected: Ok(Some), with a second list of the same user unchanged
#[tokio::test]
async fn leaves_other_lists_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tier_list_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, games) = factory::helpers::create_user_with_games(db, 1).await?;
    let target = factory::tier_list::TierListFactory::new(db, user.id)
        .row("S", 0, vec![(games[0].id, 0)])
        .build()
        .await?;
    let other = factory::tier_list::TierListFactory::new(db, user.id)
        .row("S", 0, vec![(games[0].id, 0)])
        .build()
        .await?;

    let repo = TierListRepository::new(db);
    repo.replace(target.id, user.id, param("Target", vec![]))
        .await?;

    let other = repo.get_by_id(other.id, user.id).await?.unwrap();
    assert_eq!(other.rows.len(), 1);
    assert_eq!(other.rows[0].items.len(), 1);

    Ok(())
}

/// Tests that a structure too large for a single insert statement is stored in full.
///
/// 7,000 items at five columns each exceed SQLite's bound parameter limit in one statement.
///
/// Expected: Ok(Some) with every item persisted in order
#[tokio::test]
async fn stores_structure_larger_than_one_statement() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tier_list_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, games) = factory::helpers::create_user_with_games(db, 1).await?;
    let existing = factory::create_tier_list(db, user.id).await?;
    let items: Vec<(Uuid, i32)> = (0..7000).map(|i| (games[0].id, i)).collect();

    let list = TierListRepository::new(db)
        .replace(existing.id, user.id, param("Huge", vec![row("S", 0, items)]))
        .await?
        .unwrap();

    assert_eq!(list.rows[0].items.len(), 7000);
    assert_eq!(list.rows[0].items[6999].sort_order, 6999);
    assert_eq!(TierItem::find().count(db).await?, 7000);

    Ok(())
}
