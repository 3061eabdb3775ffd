//! Database repository layer for all domain entities.
//!
//! Repositories use SeaORM entity models internally and return domain models to keep
//! the data layer separate from business logic. Every repository is generic over
//! `ConnectionTrait` so services can run it against the pool for reads or against a
//! `DatabaseTransaction` for writes.

pub mod catalog;
pub mod favorite;
pub mod user;

#[cfg(test)]
mod test;
