//! Catalog service for read access to characters, planets and vehicles.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::catalog::CatalogRepository,
    error::AppError,
    model::catalog::{Character, Planet, Vehicle},
};

pub struct CatalogService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_characters(&self) -> Result<Vec<Character>, AppError> {
        Ok(CatalogRepository::new(self.db).get_all_characters().await?)
    }

    pub async fn get_planets(&self) -> Result<Vec<Planet>, AppError> {
        Ok(CatalogRepository::new(self.db).get_all_planets().await?)
    }

    pub async fn get_vehicles(&self) -> Result<Vec<Vehicle>, AppError> {
        Ok(CatalogRepository::new(self.db).get_all_vehicles().await?)
    }

    pub async fn get_character(&self, id: i32) -> Result<Option<Character>, AppError> {
        Ok(CatalogRepository::new(self.db).find_character(id).await?)
    }

    pub async fn get_planet(&self, id: i32) -> Result<Option<Planet>, AppError> {
        Ok(CatalogRepository::new(self.db).find_planet(id).await?)
    }

    pub async fn get_vehicle(&self, id: i32) -> Result<Option<Vehicle>, AppError> {
        Ok(CatalogRepository::new(self.db).find_vehicle(id).await?)
    }
}
