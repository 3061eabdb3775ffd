pub use super::character::Entity as Character;
pub use super::fav_character::Entity as FavCharacter;
pub use super::fav_planet::Entity as FavPlanet;
pub use super::fav_vehicle::Entity as FavVehicle;
pub use super::planet::Entity as Planet;
pub use super::user::Entity as User;
pub use super::vehicle::Entity as Vehicle;
