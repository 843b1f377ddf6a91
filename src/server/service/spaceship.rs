use sea_orm::DatabaseConnection;

use crate::server::{
    data::spaceship::SpaceshipRepository,
    error::AppError,
    model::spaceship::{CreateSpaceshipParams, Spaceship},
};

pub struct SpaceshipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpaceshipService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new spaceship
    pub async fn create(&self, params: CreateSpaceshipParams) -> Result<Spaceship, AppError> {
        let repo = SpaceshipRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Gets all spaceships
    pub async fn get_all(&self) -> Result<Vec<Spaceship>, AppError> {
        let repo = SpaceshipRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a specific spaceship by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Spaceship>, AppError> {
        let repo = SpaceshipRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Deletes a spaceship along with the favorites pointing at it
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = SpaceshipRepository::new(self.db);

        let result = repo.delete(id).await?;

        Ok(result.rows_affected > 0)
    }
}
