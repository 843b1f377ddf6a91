//! Favorite data repository for database operations.
//!
//! Favorites are always read together with their items. Items are fetched in one query per
//! kind and joined in memory, so listing N favorites costs at most four queries.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::{
    data::{planet::PlanetRepository, spaceship::SpaceshipRepository, warrior::WarriorRepository},
    model::favorite::{Favorite, FavoriteItem, FavoriteTarget, FavoriteWithItem},
};

/// Repository providing database operations for favorites.
pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    /// Creates a new FavoriteRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `FavoriteRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a favorite for a user.
    ///
    /// The target item is not checked for existence and the item columns carry no foreign
    /// key, so a favorite for a missing item is stored as given.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the favorite
    /// - `target` - Item the favorite points at
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The created favorite
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, user_id: i32, target: FavoriteTarget) -> Result<Favorite, DbErr> {
        let (planet_id, spaceship_id, warrior_id) = target.columns();

        let entity = entity::favorite::ActiveModel {
            r#type: ActiveValue::Set(target.favorite_type()),
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(planet_id),
            spaceship_id: ActiveValue::Set(spaceship_id),
            warrior_id: ActiveValue::Set(warrior_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Favorite::from_entity(entity)
    }

    /// Gets every favorite of the given users with their items, ordered by favorite id.
    ///
    /// # Arguments
    /// - `user_ids` - Owners to fetch favorites for
    ///
    /// # Returns
    /// - `Ok(Vec<FavoriteWithItem>)` - Favorites of those users, empty if they have none
    /// - `Err(DbErr)` - Database error, or a stored row whose tag disagrees with its reference
    pub async fn get_by_user_ids(&self, user_ids: Vec<i32>) -> Result<Vec<FavoriteWithItem>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let favorites = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.is_in(user_ids))
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Favorite::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        self.attach_items(favorites).await
    }

    /// Gets every favorite of one user with their items.
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<FavoriteWithItem>, DbErr> {
        self.get_by_user_ids(vec![user_id]).await
    }

    /// Resolves the item of each favorite.
    ///
    /// Favorites whose item row no longer exists are returned with `item: None`.
    pub async fn attach_items(
        &self,
        favorites: Vec<Favorite>,
    ) -> Result<Vec<FavoriteWithItem>, DbErr> {
        let mut planet_ids = Vec::new();
        let mut spaceship_ids = Vec::new();
        let mut warrior_ids = Vec::new();

        for favorite in &favorites {
            match favorite.target {
                FavoriteTarget::Planet(id) => planet_ids.push(id),
                FavoriteTarget::Spaceship(id) => spaceship_ids.push(id),
                FavoriteTarget::Warrior(id) => warrior_ids.push(id),
            }
        }

        let planets: HashMap<i32, FavoriteItem> = PlanetRepository::new(self.db)
            .get_by_ids(planet_ids)
            .await?
            .into_iter()
            .map(|p| (p.id, FavoriteItem::Planet(p)))
            .collect();

        let spaceships: HashMap<i32, FavoriteItem> = SpaceshipRepository::new(self.db)
            .get_by_ids(spaceship_ids)
            .await?
            .into_iter()
            .map(|s| (s.id, FavoriteItem::Spaceship(s)))
            .collect();

        let warriors: HashMap<i32, FavoriteItem> = WarriorRepository::new(self.db)
            .get_by_ids(warrior_ids)
            .await?
            .into_iter()
            .map(|w| (w.id, FavoriteItem::Warrior(w)))
            .collect();

        Ok(favorites
            .into_iter()
            .map(|favorite| {
                let item = match favorite.target {
                    FavoriteTarget::Planet(id) => planets.get(&id).cloned(),
                    FavoriteTarget::Spaceship(id) => spaceships.get(&id).cloned(),
                    FavoriteTarget::Warrior(id) => warriors.get(&id).cloned(),
                };

                FavoriteWithItem { favorite, item }
            })
            .collect())
    }

    /// Deletes a favorite
    ///
    /// Returns OK regardless of the favorite existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
