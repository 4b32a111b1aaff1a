use super::*;

/// Tests that ids of other users' tags and unknown ids are dropped.
///
/// Expected: Ok with only the global and owned tag ids
#[tokio::test]
async fn keeps_only_visible_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let owned = factory::create_tag(db, user.id).await?;
    let global = factory::create_global_tag(db).await?;
    let foreign = factory::create_tag(db, other.id).await?;

    let mut ids = TagRepository::new(db)
        .filter_visible_ids(user.id, &[owned.id, foreign.id, global.id, Uuid::new_v4()])
        .await?;
    ids.sort();

    let mut expected = vec![owned.id, global.id];
    expected.sort();
    assert_eq!(ids, expected);

    Ok(())
}
