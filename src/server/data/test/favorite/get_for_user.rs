use super::*;

/// Tests favorites are returned in the order they were added.
///
/// Expected: Ok with planets ordered by link insertion, not planet id
#[tokio::test]
async fn returns_favorites_in_link_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let hoth = factory::planet::PlanetFactory::new(db).name("Hoth").build().await?;
    let endor = factory::planet::PlanetFactory::new(db).name("Endor").build().await?;
    factory::favorite::create_fav_planet(db, user.id, endor.id).await?;
    factory::favorite::create_fav_planet(db, user.id, hoth.id).await?;

    let repo = FavoriteRepository::new(db);
    let planets = repo.get_planets_for_user(user.id).await?;

    let names: Vec<&str> = planets.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Endor", "Hoth"]);

    Ok(())
}

/// Tests favorites of other users are excluded.
///
/// Expected: Ok with only the requested user's characters and vehicles
#[tokio::test]
async fn excludes_other_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let (character, _, vehicle) = factory::helpers::create_catalog(db).await?;
    factory::favorite::create_fav_character(db, other.id, character.id).await?;
    factory::favorite::create_fav_vehicle(db, user.id, vehicle.id).await?;

    let repo = FavoriteRepository::new(db);

    assert!(repo.get_characters_for_user(user.id).await?.is_empty());
    let vehicles = repo.get_vehicles_for_user(user.id).await?;
    assert_eq!(vehicles.len(), 1);
    assert_eq!(vehicles[0].id, vehicle.id);

    Ok(())
}
