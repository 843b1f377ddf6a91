//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! entity. Repositories use SeaORM entity models internally and return domain models to
//! keep the data layer separate from the service layer. All queries, inserts and deletes
//! go through these repositories.

pub mod favorite;
pub mod planet;
pub mod spaceship;
pub mod user;
pub mod warrior;

#[cfg(test)]
mod test;
