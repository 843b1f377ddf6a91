//! Spaceship domain model and parameters.

use crate::{
    model::spaceship::{CreateSpaceshipDto, SpaceshipDto},
    server::{error::AppError, model::non_empty},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Spaceship {
    pub id: i32,
    pub name: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
}

impl Spaceship {
    /// Converts an entity model to a spaceship domain model at the repository boundary.
    pub fn from_entity(entity: entity::spaceship::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            model: entity.model,
            manufacturer: entity.manufacturer,
        }
    }

    /// Converts the spaceship domain model to a DTO for API responses.
    pub fn into_dto(self) -> SpaceshipDto {
        SpaceshipDto {
            id: self.id,
            name: self.name,
            model: self.model,
            manufacturer: self.manufacturer,
        }
    }
}

/// Parameters for creating a spaceship. Only the name is required.
#[derive(Debug, Clone)]
pub struct CreateSpaceshipParams {
    pub name: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
}

impl CreateSpaceshipParams {
    /// Validates a create request.
    ///
    /// # Returns
    /// - `Ok(CreateSpaceshipParams)` - The request has a non-empty name
    /// - `Err(AppError::BadRequest)` - The name is missing or empty
    pub fn from_dto(dto: CreateSpaceshipDto) -> Result<Self, AppError> {
        let Some(name) = non_empty(dto.name) else {
            return Err(AppError::BadRequest("Missing spaceship name".to_string()));
        };

        Ok(Self {
            name,
            model: dto.model,
            manufacturer: dto.manufacturer,
        })
    }
}
