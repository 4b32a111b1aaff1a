use super::*;

/// Tests creating a game with tags.
///
/// Expected: Ok with the game's fields and tags sorted by name
#[tokio::test]
async fn creates_game_with_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let owned = factory::tag::TagFactory::new(db)
        .owner(Some(user.id))
        .name("Soulslike")
        .build()
        .await?;
    let global = factory::tag::TagFactory::new(db)
        .name("Indie")
        .build()
        .await?;

    let game = GameRepository::new(db)
        .create(create_param(
            user.id,
            "Hollow Knight",
            vec![owned.id, global.id, owned.id],
        ))
        .await?;

    assert_eq!(game.game.title, "Hollow Knight");
    assert_eq!(game.game.user_id, user.id);
    assert_eq!(game.game.status, "playing");
    assert_eq!(game.game.score, Some(9.5));
    let tag_names: Vec<&str> = game.tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(tag_names, vec!["Indie", "Soulslike"]);
    assert_eq!(GameTag::find().count(db).await?, 2);

    Ok(())
}
