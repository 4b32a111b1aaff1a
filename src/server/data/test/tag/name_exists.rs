use super::*;

/// Tests that tag names are unique per owner only.
///
/// Expected: Ok(true) for the same owner, Ok(false) for a different owner or global scope
#[tokio::test]
async fn scopes_names_to_owner() -> Result<(), DbErr> {
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
        .name("JRPG")
        .build()
        .await?;

    let repo = TagRepository::new(db);
    assert!(repo.name_exists(Some(user.id), "JRPG", None).await?);
    assert!(!repo.name_exists(Some(other.id), "JRPG", None).await?);
    assert!(!repo.name_exists(None, "JRPG", None).await?);

    Ok(())
}

/// Tests that the tag being renamed is excluded from the check.
///
/// Expected: Ok(false) when the only match is the excluded tag
#[tokio::test]
async fn ignores_excluded_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_game_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tag = factory::tag::TagFactory::new(db).name("Retro").build().await?;

    let exists = TagRepository::new(db)
        .name_exists(None, "Retro", Some(tag.id))
        .await?;

    assert!(!exists);

    Ok(())
}
