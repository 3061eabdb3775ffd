use super::*;

/// Tests creating one link of each kind.
///
/// Expected: Ok with one row in each link table
#[tokio::test]
async fn creates_link_in_matching_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (character, planet, vehicle) = factory::helpers::create_catalog(db).await?;

    let repo = FavoriteRepository::new(db);
    repo.create(&FavoriteParam::new(user.id, CatalogKind::Character, character.id))
        .await?;
    repo.create(&FavoriteParam::new(user.id, CatalogKind::Planet, planet.id))
        .await?;
    let vehicle_link_id = repo
        .create(&FavoriteParam::new(user.id, CatalogKind::Vehicle, vehicle.id))
        .await?;

    assert_eq!(entity::prelude::FavCharacter::find().count(db).await?, 1);
    assert_eq!(entity::prelude::FavPlanet::find().count(db).await?, 1);

    let link = entity::prelude::FavVehicle::find_by_id(vehicle_link_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(link.user_id, user.id);
    assert_eq!(link.vehicle_id, vehicle.id);

    Ok(())
}

/// Tests that the foreign key rejects a link to a missing catalog entity.
///
/// Expected: Err from the database
#[tokio::test]
async fn fails_for_missing_entity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = FavoriteRepository::new(db);
    let result = repo
        .create(&FavoriteParam::new(user.id, CatalogKind::Planet, 999))
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests inserting the same link twice, bypassing the service pre-query.
///
/// Expected: the unique index rejects the second insert and the error maps to Conflict
#[tokio::test]
async fn rejects_duplicate_link_at_unique_index() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    let param = FavoriteParam::new(user.id, CatalogKind::Planet, planet.id);

    let repo = FavoriteRepository::new(db);
    repo.create(&param).await?;
    let err = repo.create(&param).await.unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));
    assert!(matches!(
        AppError::conflict_on_unique(err, "Duplicate"),
        AppError::Conflict(msg) if msg == "Duplicate"
    ));
    assert_eq!(entity::prelude::FavPlanet::find().count(db).await?, 1);

    Ok(())
}
