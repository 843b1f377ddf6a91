//! Planet factory for creating test planet entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test planets with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::planet::PlanetFactory;
///
/// let planet = PlanetFactory::new(&db)
///     .name("Tatooine")
///     .climate("arid")
///     .population(200_000)
///     .build()
///     .await?;
/// ```
pub struct PlanetFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    climate: Option<String>,
    population: Option<i64>,
}

impl<'a> PlanetFactory<'a> {
    /// Creates a new PlanetFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Planet {n}"` where n is auto-incremented
    /// - climate: `None`
    /// - population: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Planet {}", next_id()),
            climate: None,
            population: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn climate(mut self, climate: impl Into<String>) -> Self {
        self.climate = Some(climate.into());
        self
    }

    pub fn population(mut self, population: i64) -> Self {
        self.population = Some(population);
        self
    }

    /// Builds and inserts the planet entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::planet::Model)` - Created planet entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::planet::Model, DbErr> {
        entity::planet::ActiveModel {
            name: ActiveValue::Set(self.name),
            climate: ActiveValue::Set(self.climate),
            population: ActiveValue::Set(self.population),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a planet with default values.
///
/// Shorthand for `PlanetFactory::new(db).build().await`.
pub async fn create_planet(db: &DatabaseConnection) -> Result<entity::planet::Model, DbErr> {
    PlanetFactory::new(db).build().await
}
