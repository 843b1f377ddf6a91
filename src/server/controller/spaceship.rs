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
        spaceship::{CreateSpaceshipDto, SpaceshipDto},
    },
    server::{
        error::AppError, model::spaceship::CreateSpaceshipParams, service::spaceship::SpaceshipService,
        state::AppState,
    },
};

/// Tag for grouping spaceship endpoints in OpenAPI documentation
pub static SPACESHIP_TAG: &str = "spaceship";

/// Get all spaceships.
///
/// # Returns
/// - `200 OK` - Every spaceship, possibly an empty list
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/spaceships",
    tag = SPACESHIP_TAG,
    responses(
        (status = 200, description = "Successfully retrieved spaceships", body = Vec<SpaceshipDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_spaceships(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = SpaceshipService::new(&state.db);

    let spaceships = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(spaceships.into_iter().map(|p| p.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get a specific spaceship by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Spaceship ID to fetch
///
/// # Returns
/// - `200 OK` - Spaceship details
/// - `404 Not Found` - No spaceship with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/spaceships/{id}",
    tag = SPACESHIP_TAG,
    params(
        ("id" = i32, Path, description = "Spaceship ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved spaceship", body = SpaceshipDto),
        (status = 404, description = "Spaceship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_spaceship_by_id(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let service = SpaceshipService::new(&state.db);

    match service.get_by_id(id).await? {
        Some(spaceship) => Ok((StatusCode::OK, Json(spaceship.into_dto()))),
        None => Err(AppError::NotFound("Spaceship not found".to_string())),
    }
}

/// Create a new spaceship.
///
/// Only `name` is required; `model` and `manufacturer` may be omitted.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Spaceship fields
///
/// # Returns
/// - `201 Created` - Successfully created spaceship
/// - `400 Bad Request` - Name missing or empty, or malformed body
/// - `500 Internal Server Error` - Database error, including a duplicate name
#[utoipa::path(
    post,
    path = "/spaceships",
    tag = SPACESHIP_TAG,
    request_body = CreateSpaceshipDto,
    responses(
        (status = 201, description = "Successfully created spaceship", body = SpaceshipDto),
        (status = 400, description = "Missing spaceship name", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_spaceship(
    State(state): State<AppState>,
    payload: Result<Json<CreateSpaceshipDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let params = CreateSpaceshipParams::from_dto(payload)?;

    let service = SpaceshipService::new(&state.db);

    let spaceship = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(spaceship.into_dto())))
}

/// Delete a spaceship.
///
/// Favorites pointing at the spaceship are deleted with it.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `404 Not Found` - No spaceship with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/spaceships/{id}",
    tag = SPACESHIP_TAG,
    params(
        ("id" = i32, Path, description = "Spaceship ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted spaceship", body = DeletedDto),
        (status = 404, description = "Spaceship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_spaceship(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let service = SpaceshipService::new(&state.db);

    if !service.delete(id).await? {
        return Err(AppError::NotFound("Spaceship not found".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(DeletedDto {
            message: format!("Spaceship with id {} deleted successfully", id),
        }),
    ))
}
