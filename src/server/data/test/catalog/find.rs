use super::*;

/// Tests that `find` wraps the entity in the variant matching the requested kind.
///
/// Expected: Ok(Some) with the right variant for each kind
#[tokio::test]
async fn finds_each_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (character, planet, vehicle) = factory::helpers::create_catalog(db).await?;

    let repo = CatalogRepository::new(db);

    let item = repo.find(CatalogKind::Character, character.id).await?;
    assert!(matches!(item, Some(CatalogItem::Character(c)) if c.id == character.id));

    let item = repo.find(CatalogKind::Planet, planet.id).await?;
    assert!(matches!(item, Some(CatalogItem::Planet(p)) if p.id == planet.id));

    let item = repo.find(CatalogKind::Vehicle, vehicle.id).await?;
    assert!(matches!(item, Some(CatalogItem::Vehicle(v)) if v.id == vehicle.id));

    Ok(())
}

/// Tests that an id from one table does not resolve in another.
///
/// Expected: Ok(None) for the vehicle table when only a character exists
#[tokio::test]
async fn does_not_cross_tables() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::create_character(db).await?;

    let repo = CatalogRepository::new(db);

    assert!(repo.find(CatalogKind::Vehicle, character.id).await?.is_none());
    assert!(repo.find_planet(character.id).await?.is_none());

    Ok(())
}
