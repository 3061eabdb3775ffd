//! User service for business logic.
//!
//! This module provides the `UserService` for user listing, registration and the
//! favorites view. It works with domain models rather than DTOs.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{favorite::FavoriteRepository, user::UserRepository},
    error::AppError,
    model::user::{CreateUserParam, User, UserWithFavorites},
    util::transaction,
};

const EMAIL_TAKEN: &str = "Email is assigned to a created user already";

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all users ordered by id.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All users (empty if none exist)
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all_users(&self) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;
        Ok(users)
    }

    /// Registers a new user.
    ///
    /// Runs in a transaction. The email is checked with a pre-query for a friendly
    /// conflict message; the unique index on the column still decides when two requests
    /// race, and its violation is reported as the same conflict.
    ///
    /// # Arguments
    /// - `param` - Validated user creation parameters
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Conflict)` - Email already registered
    /// - `Err(AppError::DbErr)` - Database error during query, insert or commit
    pub async fn create_user(&self, param: CreateUserParam) -> Result<User, AppError> {
        let txn = self.db.begin().await?;

        let result = async {
            let user_repo = UserRepository::new(&txn);

            if user_repo.find_by_email(&param.email).await?.is_some() {
                return Err(AppError::Conflict(EMAIL_TAKEN.to_string()));
            }

            user_repo
                .create(param)
                .await
                .map_err(|e| AppError::conflict_on_unique(e, EMAIL_TAKEN))
        }
        .await;

        let user = transaction::finish(txn, result).await?;
        tracing::info!("Created user {}", user.id);

        Ok(user)
    }

    /// Retrieves a user together with all of their favorites.
    ///
    /// # Arguments
    /// - `user_id` - Id of the user
    ///
    /// # Returns
    /// - `Ok(UserWithFavorites)` - User and their favorite characters, planets and vehicles
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_user_favorites(&self, user_id: i32) -> Result<UserWithFavorites, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let favorite_repo = FavoriteRepository::new(self.db);
        let characters = favorite_repo.get_characters_for_user(user_id).await?;
        let planets = favorite_repo.get_planets_for_user(user_id).await?;
        let vehicles = favorite_repo.get_vehicles_for_user(user_id).await?;

        Ok(UserWithFavorites {
            user,
            characters,
            planets,
            vehicles,
        })
    }
}
