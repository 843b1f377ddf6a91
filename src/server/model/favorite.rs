//! Favorite domain models.
//!
//! A favorite links a user to exactly one planet, warrior or spaceship. The table stores
//! that as a `type` column plus three nullable foreign keys; the domain model stores it as
//! [`FavoriteTarget`], so a tag that disagrees with its reference cannot be represented.

use entity::sea_orm_active_enums::FavoriteType;
use sea_orm::DbErr;

use crate::{
    model::favorite::{FavoriteDto, FavoriteTypeDto},
    server::{
        error::AppError,
        model::{planet::Planet, spaceship::Spaceship, warrior::Warrior},
    },
};

/// The item a favorite points at, by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    Planet(i32),
    Warrior(i32),
    Spaceship(i32),
}

impl FavoriteTarget {
    /// Resolves the `{item_type}/{item_id}` segments of a favorite request.
    ///
    /// # Arguments
    /// - `item_type` - One of `planet`, `warrior` or `spaceship` (case-sensitive)
    /// - `item_id` - Id of the item; its existence is not checked
    ///
    /// # Returns
    /// - `Ok(FavoriteTarget)` - Recognized item type
    /// - `Err(AppError::InvalidFavoriteType)` - Any other item type
    pub fn parse(item_type: &str, item_id: i32) -> Result<Self, AppError> {
        match item_type {
            "planet" => Ok(Self::Planet(item_id)),
            "warrior" => Ok(Self::Warrior(item_id)),
            "spaceship" => Ok(Self::Spaceship(item_id)),
            other => Err(AppError::InvalidFavoriteType(other.to_string())),
        }
    }

    /// The discriminant stored in the `type` column.
    pub fn favorite_type(&self) -> FavoriteType {
        match self {
            Self::Planet(_) => FavoriteType::Planet,
            Self::Warrior(_) => FavoriteType::Warrior,
            Self::Spaceship(_) => FavoriteType::Spaceship,
        }
    }

    /// Column values for `(planet_id, spaceship_id, warrior_id)`; exactly one is set.
    pub fn columns(&self) -> (Option<i32>, Option<i32>, Option<i32>) {
        match *self {
            Self::Planet(id) => (Some(id), None, None),
            Self::Spaceship(id) => (None, Some(id), None),
            Self::Warrior(id) => (None, None, Some(id)),
        }
    }
}

/// A stored favorite.
#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub target: FavoriteTarget,
}

impl Favorite {
    /// Converts an entity model to a favorite domain model at the repository boundary.
    ///
    /// The row must reference exactly the column its `type` names; the other two must be
    /// null.
    ///
    /// # Returns
    /// - `Ok(Favorite)` - Row is consistent
    /// - `Err(DbErr::Custom)` - Tag and references disagree
    pub fn from_entity(entity: entity::favorite::Model) -> Result<Self, DbErr> {
        let columns = (entity.planet_id, entity.spaceship_id, entity.warrior_id);

        let target = match (entity.r#type, columns) {
            (FavoriteType::Planet, (Some(id), None, None)) => FavoriteTarget::Planet(id),
            (FavoriteType::Spaceship, (None, Some(id), None)) => FavoriteTarget::Spaceship(id),
            (FavoriteType::Warrior, (None, None, Some(id))) => FavoriteTarget::Warrior(id),
            (favorite_type, _) => {
                return Err(DbErr::Custom(format!(
                    "Favorite {} is tagged {:?} but references planet={:?} spaceship={:?} warrior={:?}",
                    entity.id, favorite_type, columns.0, columns.1, columns.2
                )))
            }
        };

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            target,
        })
    }
}

/// The resolved item of a favorite.
#[derive(Debug, Clone, PartialEq)]
pub enum FavoriteItem {
    Planet(Planet),
    Warrior(Warrior),
    Spaceship(Spaceship),
}

/// A favorite together with its item, if the item row still exists.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteWithItem {
    pub favorite: Favorite,
    pub item: Option<FavoriteItem>,
}

impl FavoriteWithItem {
    /// Converts the favorite to a DTO, nesting the item under its kind's key.
    ///
    /// A dangling reference produces only `id` and `type`.
    pub fn into_dto(self) -> FavoriteDto {
        let favorite_type = match self.favorite.target {
            FavoriteTarget::Planet(_) => FavoriteTypeDto::Planet,
            FavoriteTarget::Warrior(_) => FavoriteTypeDto::Warrior,
            FavoriteTarget::Spaceship(_) => FavoriteTypeDto::Spaceship,
        };

        let mut dto = FavoriteDto {
            id: self.favorite.id,
            favorite_type,
            planet: None,
            spaceship: None,
            warrior: None,
        };

        match self.item {
            Some(FavoriteItem::Planet(planet)) => dto.planet = Some(planet.into_dto()),
            Some(FavoriteItem::Warrior(warrior)) => dto.warrior = Some(warrior.into_dto()),
            Some(FavoriteItem::Spaceship(spaceship)) => {
                dto.spaceship = Some(spaceship.into_dto())
            }
            None => {}
        }

        dto
    }
}
