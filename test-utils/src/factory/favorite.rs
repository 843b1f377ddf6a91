//! Favorite factory for creating test favorite entities.
//!
//! The factory writes the `type` column and the three references independently, so tests
//! can also produce rows whose tag disagrees with their reference.

use entity::sea_orm_active_enums::FavoriteType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test favorites with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::favorite::FavoriteFactory;
///
/// let favorite = FavoriteFactory::new(&db, user.id)
///     .planet(planet.id)
///     .build()
///     .await?;
/// ```
pub struct FavoriteFactory<'a> {
    db: &'a DatabaseConnection,
    favorite_type: FavoriteType,
    user_id: i32,
    planet_id: Option<i32>,
    spaceship_id: Option<i32>,
    warrior_id: Option<i32>,
}

impl<'a> FavoriteFactory<'a> {
    /// Creates a new FavoriteFactory owned by `user_id`.
    ///
    /// Defaults to type `Planet` with no references set; call one of `planet`, `warrior`
    /// or `spaceship` to point it at an item.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            favorite_type: FavoriteType::Planet,
            user_id,
            planet_id: None,
            spaceship_id: None,
            warrior_id: None,
        }
    }

    /// Points the favorite at a planet and sets the type to match.
    pub fn planet(mut self, planet_id: i32) -> Self {
        self.favorite_type = FavoriteType::Planet;
        self.planet_id = Some(planet_id);
        self
    }

    /// Points the favorite at a warrior and sets the type to match.
    pub fn warrior(mut self, warrior_id: i32) -> Self {
        self.favorite_type = FavoriteType::Warrior;
        self.warrior_id = Some(warrior_id);
        self
    }

    /// Points the favorite at a spaceship and sets the type to match.
    pub fn spaceship(mut self, spaceship_id: i32) -> Self {
        self.favorite_type = FavoriteType::Spaceship;
        self.spaceship_id = Some(spaceship_id);
        self
    }

    /// Overrides the stored type without touching the references.
    pub fn favorite_type(mut self, favorite_type: FavoriteType) -> Self {
        self.favorite_type = favorite_type;
        self
    }

    /// Builds and inserts the favorite entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::favorite::Model)` - Created favorite entity
    /// - `Err(DbErr)` - Database error during insert, e.g. a missing user or item row
    pub async fn build(self) -> Result<entity::favorite::Model, DbErr> {
        entity::favorite::ActiveModel {
            r#type: ActiveValue::Set(self.favorite_type),
            user_id: ActiveValue::Set(self.user_id),
            planet_id: ActiveValue::Set(self.planet_id),
            spaceship_id: ActiveValue::Set(self.spaceship_id),
            warrior_id: ActiveValue::Set(self.warrior_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a favorite of `user_id` pointing at a planet.
pub async fn create_planet_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    planet_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    FavoriteFactory::new(db, user_id).planet(planet_id).build().await
}

/// Creates a favorite of `user_id` pointing at a warrior.
pub async fn create_warrior_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    warrior_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    FavoriteFactory::new(db, user_id).warrior(warrior_id).build().await
}

/// Creates a favorite of `user_id` pointing at a spaceship.
pub async fn create_spaceship_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    spaceship_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    FavoriteFactory::new(db, user_id)
        .spaceship(spaceship_id)
        .build()
        .await
}
