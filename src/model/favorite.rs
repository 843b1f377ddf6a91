use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{planet::PlanetDto, spaceship::SpaceshipDto, warrior::WarriorDto};

/// Kind of item a favorite points at, serialized by name (`"Planet"`, `"Warrior"`, `"Spaceship"`).
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Eq, Clone, Copy, Debug)]
pub enum FavoriteTypeDto {
    Planet,
    Warrior,
    Spaceship,
}

/// A favorite with its target item expanded.
///
/// Exactly one of `planet`, `spaceship` or `warrior` is present, and only when the referenced
/// row still exists. Absent keys are omitted rather than serialized as `null`.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct FavoriteDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub favorite_type: FavoriteTypeDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planet: Option<PlanetDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spaceship: Option<SpaceshipDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warrior: Option<WarriorDto>,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct CreatedFavoriteDto {
    pub msg: String,
    pub favorite: FavoriteDto,
}
