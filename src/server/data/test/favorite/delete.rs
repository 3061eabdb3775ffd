use super::*;

/// Tests deleting an existing link.
///
/// Expected: Ok(1) and the link table is empty
#[tokio::test]
async fn deletes_existing_link() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;
    factory::favorite::create_fav_character(db, user.id, character.id).await?;

    let repo = FavoriteRepository::new(db);
    let deleted = repo
        .delete(&FavoriteParam::new(user.id, CatalogKind::Character, character.id))
        .await?;

    assert_eq!(deleted, 1);
    assert_eq!(entity::prelude::FavCharacter::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a link that does not exist.
///
/// Expected: Ok(0) and other users' links untouched
#[tokio::test]
async fn deletes_nothing_for_missing_link() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    factory::favorite::create_fav_planet(db, owner.id, planet.id).await?;

    let repo = FavoriteRepository::new(db);
    let deleted = repo
        .delete(&FavoriteParam::new(other.id, CatalogKind::Planet, planet.id))
        .await?;

    assert_eq!(deleted, 0);
    assert_eq!(entity::prelude::FavPlanet::find().count(db).await?, 1);

    Ok(())
}
