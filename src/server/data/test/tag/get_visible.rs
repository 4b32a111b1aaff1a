use super::*;

/// Tests that a user sees global tags and their own tags.
///
/// Tags owned by other users are excluded; the result is ordered by name.
///
/// Expected: Ok with global and owned tags sorted by name
#[tokio::test]
async fn returns_global_and_owned_tags_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::tag::TagFactory::new(db)
        .owner(Some(user.id))
        .name("Roguelike")
        .build()
        .await?;
    factory::tag::TagFactory::new(db).name("Co-op").build().await?;
    factory::tag::TagFactory::new(db)
        .owner(Some(other.id))
        .name("Private")
        .build()
        .await?;

    let tags = TagRepository::new(db).get_visible(user.id).await?;

    let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Co-op", "Roguelike"]);
    assert!(tags[0].is_global());
    assert!(!tags[1].is_global());

    Ok(())
}
