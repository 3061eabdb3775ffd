//! User domain models and parameters.
//!
//! Provides the domain model for API users and the parameter type for user creation.
//! The stored password is dropped in `User::from_entity` and never reaches the
//! service or controller layers.

use crate::{
    model::user::{CreateUserDto, UserDto, UserFavoritesDto},
    server::{
        error::AppError,
        model::catalog::{Character, Planet, Vehicle},
    },
};

/// Registered user without credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
    pub full_name: Option<String>,
    pub address: Option<String>,
    pub country: Option<String>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// The password column is discarded here.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            is_active: entity.is_active,
            full_name: entity.full_name,
            address: entity.address,
            country: entity.country,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            is_active: self.is_active,
            full_name: self.full_name,
            address: self.address,
            country: self.country,
        }
    }
}

/// User together with every catalog entity they have favorited.
///
/// Each list is ordered by when the favorite was added.
#[derive(Debug, Clone, PartialEq)]
pub struct UserWithFavorites {
    pub user: User,
    pub characters: Vec<Character>,
    pub planets: Vec<Planet>,
    pub vehicles: Vec<Vehicle>,
}

impl UserWithFavorites {
    pub fn into_dto(self) -> UserFavoritesDto {
        UserFavoritesDto {
            user: self.user.into_dto(),
            favorite_character: self.characters.into_iter().map(|c| c.into_dto()).collect(),
            favorite_planet: self.planets.into_iter().map(|p| p.into_dto()).collect(),
            favorite_vehicle: self.vehicles.into_iter().map(|v| v.into_dto()).collect(),
        }
    }
}

/// Parameters for creating a user.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub email: String,
    pub password: String,
    pub is_active: bool,
    pub full_name: Option<String>,
    pub address: Option<String>,
    pub country: Option<String>,
}

impl CreateUserParam {
    /// Validates a create-user request body and converts it to parameters.
    ///
    /// Surrounding whitespace is trimmed from the email.
    ///
    /// # Returns
    /// - `Ok(CreateUserParam)` - Email and password are both non-empty
    /// - `Err(AppError::BadRequest)` - Email or password is empty
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, AppError> {
        let email = dto.email.trim().to_string();
        if email.is_empty() || dto.password.is_empty() {
            return Err(AppError::BadRequest(
                "Email and password are required".to_string(),
            ));
        }

        Ok(Self {
            email,
            password: dto.password,
            is_active: dto.is_active,
            full_name: dto.full_name,
            address: dto.address,
            country: dto.country,
        })
    }
}
