//! Favorite link data repository.
//!
//! Each catalog type has its own link table (`fav_character`, `fav_planet`,
//! `fav_vehicle`). Methods taking a `FavoriteParam` dispatch on its `kind` to the
//! matching table. Link rows are only ever inserted or deleted, never updated.

use crate::server::model::{
    catalog::{CatalogKind, Character, Planet, Vehicle},
    favorite::FavoriteParam,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Checks whether the link described by `param` exists.
    pub async fn exists(&self, param: &FavoriteParam) -> Result<bool, DbErr> {
        let count = match param.kind {
            CatalogKind::Character => {
                entity::prelude::FavCharacter::find()
                    .filter(entity::fav_character::Column::UserId.eq(param.user_id))
                    .filter(entity::fav_character::Column::CharacterId.eq(param.entity_id))
                    .count(self.db)
                    .await?
            }
            CatalogKind::Planet => {
                entity::prelude::FavPlanet::find()
                    .filter(entity::fav_planet::Column::UserId.eq(param.user_id))
                    .filter(entity::fav_planet::Column::PlanetId.eq(param.entity_id))
                    .count(self.db)
                    .await?
            }
            CatalogKind::Vehicle => {
                entity::prelude::FavVehicle::find()
                    .filter(entity::fav_vehicle::Column::UserId.eq(param.user_id))
                    .filter(entity::fav_vehicle::Column::VehicleId.eq(param.entity_id))
                    .count(self.db)
                    .await?
            }
        };

        Ok(count > 0)
    }

    /// Inserts the link described by `param`.
    ///
    /// # Returns
    /// - `Ok(i32)` - Surrogate id of the new link row
    /// - `Err(DbErr)` - Database error, including a unique violation when the link exists
    pub async fn create(&self, param: &FavoriteParam) -> Result<i32, DbErr> {
        let id = match param.kind {
            CatalogKind::Character => {
                entity::fav_character::ActiveModel {
                    user_id: ActiveValue::Set(param.user_id),
                    character_id: ActiveValue::Set(param.entity_id),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
                .id
            }
            CatalogKind::Planet => {
                entity::fav_planet::ActiveModel {
                    user_id: ActiveValue::Set(param.user_id),
                    planet_id: ActiveValue::Set(param.entity_id),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
                .id
            }
            CatalogKind::Vehicle => {
                entity::fav_vehicle::ActiveModel {
                    user_id: ActiveValue::Set(param.user_id),
                    vehicle_id: ActiveValue::Set(param.entity_id),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
                .id
            }
        };

        Ok(id)
    }

    /// Deletes the link described by `param`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 when no such link existed)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, param: &FavoriteParam) -> Result<u64, DbErr> {
        let result = match param.kind {
            CatalogKind::Character => {
                entity::prelude::FavCharacter::delete_many()
                    .filter(entity::fav_character::Column::UserId.eq(param.user_id))
                    .filter(entity::fav_character::Column::CharacterId.eq(param.entity_id))
                    .exec(self.db)
                    .await?
            }
            CatalogKind::Planet => {
                entity::prelude::FavPlanet::delete_many()
                    .filter(entity::fav_planet::Column::UserId.eq(param.user_id))
                    .filter(entity::fav_planet::Column::PlanetId.eq(param.entity_id))
                    .exec(self.db)
                    .await?
            }
            CatalogKind::Vehicle => {
                entity::prelude::FavVehicle::delete_many()
                    .filter(entity::fav_vehicle::Column::UserId.eq(param.user_id))
                    .filter(entity::fav_vehicle::Column::VehicleId.eq(param.entity_id))
                    .exec(self.db)
                    .await?
            }
        };

        Ok(result.rows_affected)
    }

    /// Gets the characters a user has favorited, in the order they were added.
    pub async fn get_characters_for_user(&self, user_id: i32) -> Result<Vec<Character>, DbErr> {
        let rows = entity::prelude::FavCharacter::find()
            .filter(entity::fav_character::Column::UserId.eq(user_id))
            .order_by_asc(entity::fav_character::Column::Id)
            .find_also_related(entity::prelude::Character)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(link, character)| {
                character.map(Character::from_entity).ok_or_else(|| {
                    dangling_link(CatalogKind::Character, link.id, link.character_id)
                })
            })
            .collect()
    }

    /// Gets the planets a user has favorited, in the order they were added.
    pub async fn get_planets_for_user(&self, user_id: i32) -> Result<Vec<Planet>, DbErr> {
        let rows = entity::prelude::FavPlanet::find()
            .filter(entity::fav_planet::Column::UserId.eq(user_id))
            .order_by_asc(entity::fav_planet::Column::Id)
            .find_also_related(entity::prelude::Planet)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(link, planet)| {
                planet
                    .map(Planet::from_entity)
                    .ok_or_else(|| dangling_link(CatalogKind::Planet, link.id, link.planet_id))
            })
            .collect()
    }

    /// Gets the vehicles a user has favorited, in the order they were added.
    pub async fn get_vehicles_for_user(&self, user_id: i32) -> Result<Vec<Vehicle>, DbErr> {
        let rows = entity::prelude::FavVehicle::find()
            .filter(entity::fav_vehicle::Column::UserId.eq(user_id))
            .order_by_asc(entity::fav_vehicle::Column::Id)
            .find_also_related(entity::prelude::Vehicle)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(link, vehicle)| {
                vehicle
                    .map(Vehicle::from_entity)
                    .ok_or_else(|| dangling_link(CatalogKind::Vehicle, link.id, link.vehicle_id))
            })
            .collect()
    }
}

/// A link row whose catalog entity is gone; foreign keys cascade, so this is store corruption.
fn dangling_link(kind: CatalogKind, link_id: i32, entity_id: i32) -> DbErr {
    DbErr::RecordNotFound(format!(
        "Favorite {} link {} references missing {} {}",
        kind, link_id, kind, entity_id
    ))
}
