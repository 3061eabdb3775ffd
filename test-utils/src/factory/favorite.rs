//! Favorite link factories.
//!
//! Both the user and the catalog entity must already exist; the link tables carry
//! foreign keys to them.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Links a user to a favorite character.
pub async fn create_fav_character(
    db: &DatabaseConnection,
    user_id: i32,
    character_id: i32,
) -> Result<entity::fav_character::Model, DbErr> {
    entity::fav_character::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        character_id: ActiveValue::Set(character_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Links a user to a favorite planet.
pub async fn create_fav_planet(
    db: &DatabaseConnection,
    user_id: i32,
    planet_id: i32,
) -> Result<entity::fav_planet::Model, DbErr> {
    entity::fav_planet::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        planet_id: ActiveValue::Set(planet_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Links a user to a favorite vehicle.
pub async fn create_fav_vehicle(
    db: &DatabaseConnection,
    user_id: i32,
    vehicle_id: i32,
) -> Result<entity::fav_vehicle::Model, DbErr> {
    entity::fav_vehicle::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        vehicle_id: ActiveValue::Set(vehicle_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn links_user_to_each_catalog_type() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await?;
        let (character, planet, vehicle) = factory::helpers::create_catalog(db).await?;

        let fav_character = create_fav_character(db, user.id, character.id).await?;
        let fav_planet = create_fav_planet(db, user.id, planet.id).await?;
        let fav_vehicle = create_fav_vehicle(db, user.id, vehicle.id).await?;

        assert_eq!(fav_character.character_id, character.id);
        assert_eq!(fav_planet.planet_id, planet.id);
        assert_eq!(fav_vehicle.vehicle_id, vehicle.id);
        assert_eq!(fav_vehicle.user_id, user.id);

        Ok(())
    }
}
