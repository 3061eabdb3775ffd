use sea_orm::entity::prelude::*;

/// Registered user of the API.
///
/// `full_name`, `address` and `country` are nullable because user creation only
/// collects credentials.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub is_active: bool,
    pub full_name: Option<String>,
    pub address: Option<String>,
    pub country: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::fav_character::Entity")]
    FavCharacter,
    #[sea_orm(has_many = "super::fav_planet::Entity")]
    FavPlanet,
    #[sea_orm(has_many = "super::fav_vehicle::Entity")]
    FavVehicle,
}

impl Related<super::fav_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavCharacter.def()
    }
}

impl Related<super::fav_planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavPlanet.def()
    }
}

impl Related<super::fav_vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavVehicle.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
