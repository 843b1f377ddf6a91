//! Planet domain model and parameters.

use crate::{
    model::planet::{CreatePlanetDto, PlanetDto},
    server::{error::AppError, model::non_empty},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub climate: Option<String>,
    pub population: Option<i64>,
}

impl Planet {
    /// Converts an entity model to a planet domain model at the repository boundary.
    pub fn from_entity(entity: entity::planet::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            climate: entity.climate,
            population: entity.population,
        }
    }

    /// Converts the planet domain model to a DTO for API responses.
    pub fn into_dto(self) -> PlanetDto {
        PlanetDto {
            id: self.id,
            name: self.name,
            climate: self.climate,
            population: self.population,
        }
    }
}

/// Parameters for creating a planet. Only the name is required.
#[derive(Debug, Clone)]
pub struct CreatePlanetParams {
    pub name: String,
    pub climate: Option<String>,
    pub population: Option<i64>,
}

impl CreatePlanetParams {
    /// Validates a create request.
    ///
    /// # Returns
    /// - `Ok(CreatePlanetParams)` - The request has a non-empty name
    /// - `Err(AppError::BadRequest)` - The name is missing or empty
    pub fn from_dto(dto: CreatePlanetDto) -> Result<Self, AppError> {
        let Some(name) = non_empty(dto.name) else {
            return Err(AppError::BadRequest("Missing planet name".to_string()));
        };

        Ok(Self {
            name,
            climate: dto.climate,
            population: dto.population,
        })
    }
}
