use super::*;

/// Tests that only the owner's games are listed.
///
/// Expected: Ok with the owner's games only
#[tokio::test]
async fn returns_only_owned_games() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, games) = factory::helpers::create_user_with_games(db, 2).await?;
    let (_, _) = factory::helpers::create_user_with_games(db, 3).await?;

    let result = GameRepository::new(db).get_all_by_user(user.id).await?;

    assert_eq!(result.len(), 2);
    assert!(result.iter().all(|g| g.game.user_id == user.id));
    assert!(result.iter().any(|g| g.game.id == games[0].id));

    Ok(())
}

/// Tests that another user's game cannot be fetched.
///
/// Expected: Ok(None)
#[tokio::test]
async fn get_by_id_returns_none_for_other_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, games) = factory::helpers::create_user_with_games(db, 1).await?;
    let other = factory::create_user(db).await?;

    let result = GameRepository::new(db).get_by_id(games[0].id, other.id).await?;

    assert!(result.is_none());

    Ok(())
}
