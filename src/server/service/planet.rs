use sea_orm::DatabaseConnection;

use crate::server::{
    data::planet::PlanetRepository,
    error::AppError,
    model::planet::{CreatePlanetParams, Planet},
};

pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new planet
    pub async fn create(&self, params: CreatePlanetParams) -> Result<Planet, AppError> {
        let repo = PlanetRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Gets all planets
    pub async fn get_all(&self) -> Result<Vec<Planet>, AppError> {
        let repo = PlanetRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a specific planet by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Planet>, AppError> {
        let repo = PlanetRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Deletes a planet along with the favorites pointing at it
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = PlanetRepository::new(self.db);

        let result = repo.delete(id).await?;

        Ok(result.rows_affected > 0)
    }
}
