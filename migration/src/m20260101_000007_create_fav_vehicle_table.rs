use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000001_create_user_table::User;
use super::m20260101_000004_create_vehicle_table::Vehicle;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavVehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(FavVehicle::Id))
                    .col(integer(FavVehicle::UserId))
                    .col(integer(FavVehicle::VehicleId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fav_vehicle_user_id")
                            .from(FavVehicle::Table, FavVehicle::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fav_vehicle_vehicle_id")
                            .from(FavVehicle::Table, FavVehicle::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_fav_vehicle_user_vehicle_unique")
                            .col(FavVehicle::UserId)
                            .col(FavVehicle::VehicleId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FavVehicle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FavVehicle {
    Table,
    Id,
    UserId,
    VehicleId,
}
