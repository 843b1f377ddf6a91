use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DeletedDto, ErrorDto, MessageDto},
        planet::{CreatePlanetDto, PlanetDto},
    },
    server::{
        error::AppError, model::planet::CreatePlanetParams, service::planet::PlanetService,
        state::AppState,
    },
};

/// Tag for grouping planet endpoints in OpenAPI documentation
pub static PLANET_TAG: &str = "planet";

/// Get all planets.
///
/// # Returns
/// - `200 OK` - Every planet, possibly an empty list
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Successfully retrieved planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = PlanetService::new(&state.db);

    let planets = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(planets.into_iter().map(|p| p.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get a specific planet by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Planet ID to fetch
///
/// # Returns
/// - `200 OK` - Planet details
/// - `404 Not Found` - No planet with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet_by_id(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let service = PlanetService::new(&state.db);

    match service.get_by_id(id).await? {
        Some(planet) => Ok((StatusCode::OK, Json(planet.into_dto()))),
        None => Err(AppError::NotFound("Planet not found".to_string())),
    }
}

/// Create a new planet.
///
/// Only `name` is required; `climate` and `population` may be omitted.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Planet fields
///
/// # Returns
/// - `201 Created` - Successfully created planet
/// - `400 Bad Request` - Name missing or empty, or malformed body
/// - `500 Internal Server Error` - Database error, including a duplicate name
#[utoipa::path(
    post,
    path = "/planets",
    tag = PLANET_TAG,
    request_body = CreatePlanetDto,
    responses(
        (status = 201, description = "Successfully created planet", body = PlanetDto),
        (status = 400, description = "Missing planet name", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    payload: Result<Json<CreatePlanetDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let params = CreatePlanetParams::from_dto(payload)?;

    let service = PlanetService::new(&state.db);

    let planet = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(planet.into_dto())))
}

/// Delete a planet.
///
/// Favorites pointing at the planet are deleted with it.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `404 Not Found` - No planet with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted planet", body = DeletedDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_planet(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let service = PlanetService::new(&state.db);

    if !service.delete(id).await? {
        return Err(AppError::NotFound("Planet not found".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(DeletedDto {
            message: format!("Planet with id {} deleted successfully", id),
        }),
    ))
}
