//! Catalog data repository.
//!
//! Read-only queries over the character, planet and vehicle tables.

use crate::server::model::catalog::{CatalogItem, CatalogKind, Character, Planet, Vehicle};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

pub struct CatalogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CatalogRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all characters ordered by id.
    pub async fn get_all_characters(&self) -> Result<Vec<Character>, DbErr> {
        let entities = entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Character::from_entity).collect())
    }

    /// Gets all planets ordered by id.
    pub async fn get_all_planets(&self) -> Result<Vec<Planet>, DbErr> {
        let entities = entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Planet::from_entity).collect())
    }

    /// Gets all vehicles ordered by id.
    pub async fn get_all_vehicles(&self) -> Result<Vec<Vehicle>, DbErr> {
        let entities = entity::prelude::Vehicle::find()
            .order_by_asc(entity::vehicle::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Vehicle::from_entity).collect())
    }

    pub async fn find_character(&self, id: i32) -> Result<Option<Character>, DbErr> {
        let entity = entity::prelude::Character::find_by_id(id).one(self.db).await?;
        Ok(entity.map(Character::from_entity))
    }

    pub async fn find_planet(&self, id: i32) -> Result<Option<Planet>, DbErr> {
        let entity = entity::prelude::Planet::find_by_id(id).one(self.db).await?;
        Ok(entity.map(Planet::from_entity))
    }

    pub async fn find_vehicle(&self, id: i32) -> Result<Option<Vehicle>, DbErr> {
        let entity = entity::prelude::Vehicle::find_by_id(id).one(self.db).await?;
        Ok(entity.map(Vehicle::from_entity))
    }

    /// Finds a catalog entity of the given type by id.
    ///
    /// # Returns
    /// - `Ok(Some(CatalogItem))` - Entity found, wrapped in the variant matching `kind`
    /// - `Ok(None)` - No entity of that type with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find(&self, kind: CatalogKind, id: i32) -> Result<Option<CatalogItem>, DbErr> {
        let item = match kind {
            CatalogKind::Character => self.find_character(id).await?.map(CatalogItem::Character),
            CatalogKind::Planet => self.find_planet(id).await?.map(CatalogItem::Planet),
            CatalogKind::Vehicle => self.find_vehicle(id).await?.map(CatalogItem::Vehicle),
        };

        Ok(item)
    }
}
