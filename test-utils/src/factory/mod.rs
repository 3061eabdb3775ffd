//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each catalog entity has a `Factory` struct for
//! customization and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::create_user(db).await?;
//!     let planet = factory::create_planet(db).await?;
//!     factory::favorite::create_fav_planet(db, user.id, planet.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `character` - Create character entities
//! - `planet` - Create planet entities
//! - `vehicle` - Create vehicle entities
//! - `favorite` - Create favorite link entities
//! - `helpers` - ID generation and multi-entity helpers

pub mod character;
pub mod favorite;
pub mod helpers;
pub mod planet;
pub mod user;
pub mod vehicle;

pub use character::create_character;
pub use planet::create_planet;
pub use user::create_user;
pub use vehicle::create_vehicle;
