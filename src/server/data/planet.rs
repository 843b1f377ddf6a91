//! Planet data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::planet::{CreatePlanetParams, Planet};

/// Repository providing database operations for planets.
pub struct PlanetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetRepository<'a> {
    /// Creates a new PlanetRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PlanetRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a planet and returns it with its assigned id.
    ///
    /// # Arguments
    /// - `params` - Validated planet fields
    ///
    /// # Returns
    /// - `Ok(Planet)` - The created planet
    /// - `Err(DbErr)` - Database error, including a duplicate name
    pub async fn create(&self, params: CreatePlanetParams) -> Result<Planet, DbErr> {
        let entity = entity::planet::ActiveModel {
            name: ActiveValue::Set(params.name),
            climate: ActiveValue::Set(params.climate),
            population: ActiveValue::Set(params.population),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Planet::from_entity(entity))
    }

    /// Gets every planet ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Planet>, DbErr> {
        let entities = entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Planet::from_entity).collect())
    }

    /// Gets a planet by id.
    ///
    /// # Returns
    /// - `Ok(Some(Planet))` - Planet found
    /// - `Ok(None)` - No planet with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Planet>, DbErr> {
        let entity = entity::prelude::Planet::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Planet::from_entity))
    }

    /// Gets the planets with the given ids. Ids with no row are skipped.
    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<Vec<Planet>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Planet::find()
            .filter(entity::planet::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Planet::from_entity).collect())
    }

    /// Deletes a planet and every favorite pointing at it in one transaction.
    ///
    /// Returns OK regardless of the planet existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::PlanetId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Planet::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result)
    }
}
