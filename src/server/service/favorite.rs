use sea_orm::DatabaseConnection;

use crate::server::{
    data::favorite::FavoriteRepository,
    error::AppError,
    model::favorite::{FavoriteTarget, FavoriteWithItem},
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a favorite for a user and returns it with its item resolved.
    ///
    /// The item id is stored as given; a missing item only shows up as an absent nested
    /// object in the response.
    pub async fn create(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<FavoriteWithItem, AppError> {
        let repo = FavoriteRepository::new(self.db);

        let favorite = repo.create(user_id, target).await?;

        let mut with_item = repo.attach_items(vec![favorite]).await?;

        with_item
            .pop()
            .ok_or_else(|| AppError::InternalError("Favorite missing after creation".to_string()))
    }

    /// Gets every favorite of a user, empty if the user has none or does not exist
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<FavoriteWithItem>, AppError> {
        let repo = FavoriteRepository::new(self.db);

        Ok(repo.get_by_user_id(user_id).await?)
    }

    /// Deletes a favorite
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = FavoriteRepository::new(self.db);

        let result = repo.delete(id).await?;

        Ok(result.rows_affected > 0)
    }
}
