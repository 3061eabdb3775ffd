//! Vehicle factory for creating test vehicle entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test vehicles with customizable fields.
pub struct VehicleFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    model: String,
    manufacturer: String,
    passengers: i32,
    max_speed: i32,
}

impl<'a> VehicleFactory<'a> {
    /// Creates a new VehicleFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Vehicle {id}"`
    /// - model: `"T-16"`, manufacturer: `"Incom Corporation"`
    /// - passengers: `1`, max_speed: `1200`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Vehicle {}", next_id()),
            model: "T-16".to_string(),
            manufacturer: "Incom Corporation".to_string(),
            passengers: 1,
            max_speed: 1200,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = manufacturer.into();
        self
    }

    pub fn passengers(mut self, passengers: i32) -> Self {
        self.passengers = passengers;
        self
    }

    pub fn max_speed(mut self, max_speed: i32) -> Self {
        self.max_speed = max_speed;
        self
    }

    /// Builds and inserts the vehicle entity into the database.
    pub async fn build(self) -> Result<entity::vehicle::Model, DbErr> {
        entity::vehicle::ActiveModel {
            name: ActiveValue::Set(self.name),
            model: ActiveValue::Set(self.model),
            manufacturer: ActiveValue::Set(self.manufacturer),
            passengers: ActiveValue::Set(self.passengers),
            max_speed: ActiveValue::Set(self.max_speed),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a vehicle with default values.
pub async fn create_vehicle(db: &DatabaseConnection) -> Result<entity::vehicle::Model, DbErr> {
    VehicleFactory::new(db).build().await
}
