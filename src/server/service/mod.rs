//! Business logic layer.
//!
//! Services sit between controllers and repositories. They own transaction
//! boundaries for writes and translate missing or duplicate records into
//! `AppError` variants.

pub mod catalog;
pub mod favorite;
pub mod user;

#[cfg(test)]
mod test;
