pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_user_table;
mod m20260101_000002_create_character_table;
mod m20260101_000003_create_planet_table;
mod m20260101_000004_create_vehicle_table;
mod m20260101_000005_create_fav_character_table;
mod m20260101_000006_create_fav_planet_table;
mod m20260101_000007_create_fav_vehicle_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_user_table::Migration),
            Box::new(m20260101_000002_create_character_table::Migration),
            Box::new(m20260101_000003_create_planet_table::Migration),
            Box::new(m20260101_000004_create_vehicle_table::Migration),
            Box::new(m20260101_000005_create_fav_character_table::Migration),
            Box::new(m20260101_000006_create_fav_planet_table::Migration),
            Box::new(m20260101_000007_create_fav_vehicle_table::Migration),
        ]
    }
}
