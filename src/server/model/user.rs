//! User domain models and parameters.

use crate::{model::user::UserDto, server::model::favorite::FavoriteWithItem};

/// A user with their favorites. The password is left behind in the entity.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub favorites: Vec<FavoriteWithItem>,
}

impl User {
    /// Converts an entity model and its favorites to a user domain model.
    pub fn from_entity(entity: entity::user::Model, favorites: Vec<FavoriteWithItem>) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            favorites,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            favorite: self
                .favorites
                .into_iter()
                .map(FavoriteWithItem::into_dto)
                .collect(),
        }
    }
}

/// Parameters for inserting a user account.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    /// Explicit id, or `None` to let the database assign one.
    pub id: Option<i32>,
    pub email: String,
    pub password: String,
    pub is_active: bool,
}
