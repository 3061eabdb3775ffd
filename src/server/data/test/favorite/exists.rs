use super::*;

/// Tests existence checks are scoped to user, kind and entity.
///
/// Expected: true only for the exact stored link
#[tokio::test]
async fn checks_exact_link() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let (character, planet, vehicle) = factory::helpers::create_catalog(db).await?;
    factory::favorite::create_fav_vehicle(db, user.id, vehicle.id).await?;

    let repo = FavoriteRepository::new(db);

    assert!(
        repo.exists(&FavoriteParam::new(user.id, CatalogKind::Vehicle, vehicle.id))
            .await?
    );
    assert!(
        !repo
            .exists(&FavoriteParam::new(other.id, CatalogKind::Vehicle, vehicle.id))
            .await?
    );
    assert!(
        !repo
            .exists(&FavoriteParam::new(user.id, CatalogKind::Planet, planet.id))
            .await?
    );
    assert!(
        !repo
            .exists(&FavoriteParam::new(user.id, CatalogKind::Character, character.id))
            .await?
    );

    Ok(())
}
