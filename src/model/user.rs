use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::catalog::{CharacterDto, PlanetDto, VehicleDto};

/// Serialized user. There is no password field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Serialized user with the catalog entities they have favorited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserFavoritesDto {
    #[serde(flatten)]
    pub user: UserDto,
    pub favorite_character: Vec<CharacterDto>,
    pub favorite_planet: Vec<PlanetDto>,
    pub favorite_vehicle: Vec<VehicleDto>,
}

/// Request body for `POST /user`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserDto {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}
