//! Warrior factory for creating test warrior entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test warriors with customizable fields.
pub struct WarriorFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    species: Option<String>,
    rank: Option<String>,
}

impl<'a> WarriorFactory<'a> {
    /// Creates a new WarriorFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Warrior {n}"` where n is auto-incremented
    /// - species: `"Human"`
    /// - rank: `"Jedi Knight"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Warrior {}", next_id()),
            species: Some("Human".to_string()),
            rank: Some("Jedi Knight".to_string()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn species(mut self, species: impl Into<String>) -> Self {
        self.species = Some(species.into());
        self
    }

    pub fn rank(mut self, rank: impl Into<String>) -> Self {
        self.rank = Some(rank.into());
        self
    }

    /// Builds and inserts the warrior entity into the database.
    pub async fn build(self) -> Result<entity::warrior::Model, DbErr> {
        entity::warrior::ActiveModel {
            name: ActiveValue::Set(self.name),
            species: ActiveValue::Set(self.species),
            rank: ActiveValue::Set(self.rank),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a warrior with default values.
pub async fn create_warrior(db: &DatabaseConnection) -> Result<entity::warrior::Model, DbErr> {
    WarriorFactory::new(db).build().await
}
