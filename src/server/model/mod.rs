//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. The user model never carries the
//! stored password, so no response built from it can leak one.

pub mod catalog;
pub mod favorite;
pub mod user;
