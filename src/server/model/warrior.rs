//! Warrior domain model and parameters.

use crate::{
    model::warrior::{CreateWarriorDto, WarriorDto},
    server::{error::AppError, model::non_empty},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Warrior {
    pub id: i32,
    pub name: String,
    pub species: Option<String>,
    pub rank: Option<String>,
}

impl Warrior {
    /// Converts an entity model to a warrior domain model at the repository boundary.
    pub fn from_entity(entity: entity::warrior::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            species: entity.species,
            rank: entity.rank,
        }
    }

    /// Converts the warrior domain model to a DTO for API responses.
    pub fn into_dto(self) -> WarriorDto {
        WarriorDto {
            id: self.id,
            name: self.name,
            species: self.species,
            rank: self.rank,
        }
    }
}

/// Parameters for creating a warrior.
///
/// Unlike the other items, a warrior needs all of its fields.
#[derive(Debug, Clone)]
pub struct CreateWarriorParams {
    pub name: String,
    pub species: String,
    pub rank: String,
}

impl CreateWarriorParams {
    /// Validates a create request.
    ///
    /// # Returns
    /// - `Ok(CreateWarriorParams)` - Name, species and rank are all non-empty
    /// - `Err(AppError::BadRequest)` - Any of them is missing or empty
    pub fn from_dto(dto: CreateWarriorDto) -> Result<Self, AppError> {
        match (non_empty(dto.name), non_empty(dto.species), non_empty(dto.rank)) {
            (Some(name), Some(species), Some(rank)) => Ok(Self {
                name,
                species,
                rank,
            }),
            _ => Err(AppError::BadRequest(
                "Missing required warrior fields".to_string(),
            )),
        }
    }
}
