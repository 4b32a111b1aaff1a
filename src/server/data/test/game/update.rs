use super::*;

/// Tests that absent fields are left unchanged.
///
/// Expected: Ok(Some) with only the provided fields changed and tags kept
#[tokio::test]
async fn applies_partial_update_and_keeps_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let tag = factory::create_tag(db, user.id).await?;
    let repo = GameRepository::new(db);
    let game = repo
        .create(create_param(user.id, "Celeste", vec![tag.id]))
        .await?;

    let updated = repo
        .update(
            game.game.id,
            user.id,
            UpdateGameParam {
                status: Some(GameStatus::Completed),
                hours_played: Some(40),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.game.title, "Celeste");
    assert_eq!(updated.game.status, "completed");
    assert_eq!(updated.game.hours_played, 40);
    assert_eq!(updated.tags.len(), 1);
    assert_eq!(updated.tags[0].id, tag.id);

    Ok(())
}

/// Tests that an empty tag list clears the game's tags.
///
/// Expected: Ok(Some) with no tags and no links left
#[tokio::test]
async fn empty_tag_ids_clear_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let tag = factory::create_tag(db, user.id).await?;
    let repo = GameRepository::new(db);
    let game = repo
        .create(create_param(user.id, "Hades", vec![tag.id]))
        .await?;

    let updated = repo
        .update(
            game.game.id,
            user.id,
            UpdateGameParam {
                tag_ids: Some(vec![]),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert!(updated.tags.is_empty());
    assert_eq!(GameTag::find().count(db).await?, 0);

    Ok(())
}

/// Tests that another user's game cannot be updated.
///
/// Expected: Ok(None), with the game unchanged
#[tokio::test]
async fn returns_none_for_other_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, games) = factory::helpers::create_user_with_games(db, 1).await?;
    let other = factory::create_user(db).await?;
    let repo = GameRepository::new(db);

    let result = repo
        .update(
            games[0].id,
            other.id,
            UpdateGameParam {
                title: Some("Taken".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());
    let game = repo.get_by_id(games[0].id, owner.id).await?.unwrap();
    assert_eq!(game.game.title, games[0].title);

    Ok(())
}

/// Tests that nullable fields can be cleared while absent ones stay untouched.
///
/// Expected: Ok(Some) with score and date_finished cleared, last_played_at kept
#[tokio::test]
async fn clears_nullable_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = GameRepository::new(db);
    let played = Utc::now();
    let game = repo
        .create(CreateGameParam {
            date_finished: Some(played),
            last_played_at: Some(played),
            ..create_param(user.id, "Outer Wilds", vec![])
        })
        .await?;

    let updated = repo
        .update(
            game.game.id,
            user.id,
            UpdateGameParam {
                score: Some(None),
                date_finished: Some(None),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.game.score, None);
    assert_eq!(updated.game.date_finished, None);
    assert!(updated.game.last_played_at.is_some());

    Ok(())
}
