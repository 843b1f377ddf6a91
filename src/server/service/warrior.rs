use sea_orm::DatabaseConnection;

use crate::server::{
    data::warrior::WarriorRepository,
    error::AppError,
    model::warrior::{CreateWarriorParams, Warrior},
};

pub struct WarriorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WarriorService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new warrior
    pub async fn create(&self, params: CreateWarriorParams) -> Result<Warrior, AppError> {
        let repo = WarriorRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Gets all warriors
    pub async fn get_all(&self) -> Result<Vec<Warrior>, AppError> {
        let repo = WarriorRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a specific warrior by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Warrior>, AppError> {
        let repo = WarriorRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Deletes a warrior along with the favorites pointing at it
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = WarriorRepository::new(self.db);

        let result = repo.delete(id).await?;

        Ok(result.rows_affected > 0)
    }
}
