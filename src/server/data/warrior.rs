//! Warrior data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::warrior::{CreateWarriorParams, Warrior};

/// Repository providing database operations for warriors.
pub struct WarriorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WarriorRepository<'a> {
    /// Creates a new WarriorRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `WarriorRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a warrior and returns it with its assigned id.
    ///
    /// # Arguments
    /// - `params` - Validated warrior fields
    ///
    /// # Returns
    /// - `Ok(Warrior)` - The created warrior
    /// - `Err(DbErr)` - Database error, including a duplicate name
    pub async fn create(&self, params: CreateWarriorParams) -> Result<Warrior, DbErr> {
        let entity = entity::warrior::ActiveModel {
            name: ActiveValue::Set(params.name),
            species: ActiveValue::Set(Some(params.species)),
            rank: ActiveValue::Set(Some(params.rank)),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Warrior::from_entity(entity))
    }

    /// Gets every warrior ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Warrior>, DbErr> {
        let entities = entity::prelude::Warrior::find()
            .order_by_asc(entity::warrior::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Warrior::from_entity).collect())
    }

    /// Gets a warrior by id.
    ///
    /// # Returns
    /// - `Ok(Some(Warrior))` - Warrior found
    /// - `Ok(None)` - No warrior with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Warrior>, DbErr> {
        let entity = entity::prelude::Warrior::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Warrior::from_entity))
    }

    /// Gets the warriors with the given ids. Ids with no row are skipped.
    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<Vec<Warrior>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Warrior::find()
            .filter(entity::warrior::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Warrior::from_entity).collect())
    }

    /// Deletes a warrior and every favorite pointing at it in one transaction.
    ///
    /// Returns OK regardless of the warrior existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::WarriorId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Warrior::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result)
    }
}
