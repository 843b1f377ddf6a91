//! Spaceship factory for creating test spaceship entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test spaceships with customizable fields.
pub struct SpaceshipFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    model: Option<String>,
    manufacturer: Option<String>,
}

impl<'a> SpaceshipFactory<'a> {
    /// Creates a new SpaceshipFactory named `"Spaceship {n}"` with no model or manufacturer.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Spaceship {}", next_id()),
            model: None,
            manufacturer: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    /// Builds and inserts the spaceship entity into the database.
    pub async fn build(self) -> Result<entity::spaceship::Model, DbErr> {
        entity::spaceship::ActiveModel {
            name: ActiveValue::Set(self.name),
            model: ActiveValue::Set(self.model),
            manufacturer: ActiveValue::Set(self.manufacturer),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a spaceship with default values.
pub async fn create_spaceship(db: &DatabaseConnection) -> Result<entity::spaceship::Model, DbErr> {
    SpaceshipFactory::new(db).build().await
}
