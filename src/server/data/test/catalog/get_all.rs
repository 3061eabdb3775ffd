use super::*;

/// Tests listing each catalog type on empty tables.
///
/// Expected: Ok with empty vectors
#[tokio::test]
async fn returns_empty_for_empty_tables() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CatalogRepository::new(db);

    assert!(repo.get_all_characters().await?.is_empty());
    assert!(repo.get_all_planets().await?.is_empty());
    assert!(repo.get_all_vehicles().await?.is_empty());

    Ok(())
}

/// Tests that listed characters carry every stored field.
///
/// Expected: Ok with characters in id order
#[tokio::test]
async fn returns_characters_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let luke = factory::character::CharacterFactory::new(db)
        .name("Luke Skywalker")
        .height("172")
        .gender("male")
        .eye_color("blue")
        .build()
        .await?;
    let leia = factory::character::CharacterFactory::new(db)
        .name("Leia Organa")
        .height("150")
        .gender("female")
        .eye_color("brown")
        .build()
        .await?;

    let repo = CatalogRepository::new(db);
    let characters = repo.get_all_characters().await?;

    assert_eq!(characters.len(), 2);
    assert_eq!(characters[0].id, luke.id);
    assert_eq!(characters[0].name, "Luke Skywalker");
    assert_eq!(characters[1].id, leia.id);
    assert_eq!(characters[1].eye_color, "brown");

    Ok(())
}

/// Tests listing planets and vehicles alongside each other.
///
/// Expected: Ok with one entity per table
#[tokio::test]
async fn returns_planets_and_vehicles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::planet::PlanetFactory::new(db)
        .name("Tatooine")
        .population(200_000)
        .build()
        .await?;
    factory::vehicle::VehicleFactory::new(db)
        .name("Sand Crawler")
        .passengers(30)
        .build()
        .await?;

    let repo = CatalogRepository::new(db);
    let planets = repo.get_all_planets().await?;
    let vehicles = repo.get_all_vehicles().await?;

    assert_eq!(planets.len(), 1);
    assert_eq!(planets[0].name, "Tatooine");
    assert_eq!(planets[0].population, 200_000);
    assert_eq!(vehicles.len(), 1);
    assert_eq!(vehicles[0].passengers, 30);

    Ok(())
}
