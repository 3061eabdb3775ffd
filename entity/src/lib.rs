//! SeaORM entity definitions for the holonet schema.
//!
//! One module per table. `prelude` re-exports every `Entity` under its table's
//! type name for use in queries.

pub mod prelude;

pub mod character;
pub mod fav_character;
pub mod fav_planet;
pub mod fav_vehicle;
pub mod planet;
pub mod user;
pub mod vehicle;
