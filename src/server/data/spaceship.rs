//! Spaceship data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::spaceship::{CreateSpaceshipParams, Spaceship};

/// Repository providing database operations for spaceships.
pub struct SpaceshipRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpaceshipRepository<'a> {
    /// Creates a new SpaceshipRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `SpaceshipRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a spaceship and returns it with its assigned id.
    ///
    /// # Arguments
    /// - `params` - Validated spaceship fields
    ///
    /// # Returns
    /// - `Ok(Spaceship)` - The created spaceship
    /// - `Err(DbErr)` - Database error, including a duplicate name
    pub async fn create(&self, params: CreateSpaceshipParams) -> Result<Spaceship, DbErr> {
        let entity = entity::spaceship::ActiveModel {
            name: ActiveValue::Set(params.name),
            model: ActiveValue::Set(params.model),
            manufacturer: ActiveValue::Set(params.manufacturer),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Spaceship::from_entity(entity))
    }

    /// Gets every spaceship ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Spaceship>, DbErr> {
        let entities = entity::prelude::Spaceship::find()
            .order_by_asc(entity::spaceship::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Spaceship::from_entity).collect())
    }

    /// Gets a spaceship by id.
    ///
    /// # Returns
    /// - `Ok(Some(Spaceship))` - Spaceship found
    /// - `Ok(None)` - No spaceship with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Spaceship>, DbErr> {
        let entity = entity::prelude::Spaceship::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Spaceship::from_entity))
    }

    /// Gets the spaceships with the given ids. Ids with no row are skipped.
    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<Vec<Spaceship>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Spaceship::find()
            .filter(entity::spaceship::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Spaceship::from_entity).collect())
    }

    /// Deletes a spaceship and every favorite pointing at it in one transaction.
    ///
    /// Returns OK regardless of the spaceship existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::SpaceshipId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Spaceship::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result)
    }
}
