use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::server::{
    data::{favorite::FavoriteRepository, user::UserRepository},
    error::AppError,
    model::{favorite::FavoriteWithItem, user::User},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all users, each with their favorites expanded.
    ///
    /// Favorites for every user are loaded in a single pass and grouped by owner.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;

        let user_ids = users.iter().map(|u| u.id).collect();
        let favorites = FavoriteRepository::new(self.db)
            .get_by_user_ids(user_ids)
            .await?;

        let mut by_user: HashMap<i32, Vec<FavoriteWithItem>> = HashMap::new();
        for favorite in favorites {
            by_user
                .entry(favorite.favorite.user_id)
                .or_default()
                .push(favorite);
        }

        Ok(users
            .into_iter()
            .map(|user| {
                let favorites = by_user.remove(&user.id).unwrap_or_default();
                User::from_entity(user, favorites)
            })
            .collect())
    }
}
