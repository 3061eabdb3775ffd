//! Catalog domain models.
//!
//! Characters, planets and vehicles are read-only reference data seeded outside of
//! this service. `CatalogKind` names the three types so favorite operations can be
//! written once and dispatched per type.

use std::fmt;

use crate::model::catalog::{CatalogItemDto, CharacterDto, PlanetDto, VehicleDto};

/// The three catalog types a user can favorite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Character,
    Planet,
    Vehicle,
}

impl CatalogKind {
    /// Capitalized name for use at the start of client-facing messages.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Character => "Character",
            Self::Planet => "Planet",
            Self::Vehicle => "Vehicle",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Character => "character",
            Self::Planet => "planet",
            Self::Vehicle => "vehicle",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub height: String,
    pub gender: String,
    pub eye_color: String,
}

impl Character {
    pub fn from_entity(entity: entity::character::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            height: entity.height,
            gender: entity.gender,
            eye_color: entity.eye_color,
        }
    }

    pub fn into_dto(self) -> CharacterDto {
        CharacterDto {
            id: self.id,
            name: self.name,
            height: self.height,
            gender: self.gender,
            eye_color: self.eye_color,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub climate: String,
    pub gravity: String,
    pub population: i64,
}

impl Planet {
    pub fn from_entity(entity: entity::planet::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            climate: entity.climate,
            gravity: entity.gravity,
            population: entity.population,
        }
    }

    pub fn into_dto(self) -> PlanetDto {
        PlanetDto {
            id: self.id,
            name: self.name,
            climate: self.climate,
            gravity: self.gravity,
            population: self.population,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: i32,
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub passengers: i32,
    pub max_speed: i32,
}

impl Vehicle {
    pub fn from_entity(entity: entity::vehicle::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            model: entity.model,
            manufacturer: entity.manufacturer,
            passengers: entity.passengers,
            max_speed: entity.max_speed,
        }
    }

    pub fn into_dto(self) -> VehicleDto {
        VehicleDto {
            id: self.id,
            name: self.name,
            model: self.model,
            manufacturer: self.manufacturer,
            passengers: self.passengers,
            max_speed: self.max_speed,
        }
    }
}

/// A single catalog entity of any type.
///
/// Returned when a favorite link is created; the link itself is never exposed.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogItem {
    Character(Character),
    Planet(Planet),
    Vehicle(Vehicle),
}

impl CatalogItem {
    pub fn kind(&self) -> CatalogKind {
        match self {
            Self::Character(_) => CatalogKind::Character,
            Self::Planet(_) => CatalogKind::Planet,
            Self::Vehicle(_) => CatalogKind::Vehicle,
        }
    }

    pub fn into_dto(self) -> CatalogItemDto {
        match self {
            Self::Character(character) => CatalogItemDto::Character(character.into_dto()),
            Self::Planet(planet) => CatalogItemDto::Planet(planet.into_dto()),
            Self::Vehicle(vehicle) => CatalogItemDto::Vehicle(vehicle.into_dto()),
        }
    }
}
