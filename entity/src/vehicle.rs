use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicle")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub passengers: i32,
    pub max_speed: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::fav_vehicle::Entity")]
    FavVehicle,
}

impl Related<super::fav_vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavVehicle.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
