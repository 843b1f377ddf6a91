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
        warrior::{CreateWarriorDto, WarriorDto},
    },
    server::{
        error::AppError, model::warrior::CreateWarriorParams, service::warrior::WarriorService,
        state::AppState,
    },
};

/// Tag for grouping warrior endpoints in OpenAPI documentation
pub static WARRIOR_TAG: &str = "warrior";

/// Get all warriors.
///
/// # Returns
/// - `200 OK` - Every warrior, possibly an empty list
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/warriors",
    tag = WARRIOR_TAG,
    responses(
        (status = 200, description = "Successfully retrieved warriors", body = Vec<WarriorDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_warriors(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = WarriorService::new(&state.db);

    let warriors = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(warriors.into_iter().map(|p| p.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get a specific warrior by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Warrior ID to fetch
///
/// # Returns
/// - `200 OK` - Warrior details
/// - `404 Not Found` - No warrior with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/warriors/{id}",
    tag = WARRIOR_TAG,
    params(
        ("id" = i32, Path, description = "Warrior ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved warrior", body = WarriorDto),
        (status = 404, description = "Warrior not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_warrior_by_id(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let service = WarriorService::new(&state.db);

    match service.get_by_id(id).await? {
        Some(warrior) => Ok((StatusCode::OK, Json(warrior.into_dto()))),
        None => Err(AppError::NotFound("Warrior not found".to_string())),
    }
}

/// Create a new warrior.
///
/// `name`, `species` and `rank` are all required and must be non-empty.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Warrior fields
///
/// # Returns
/// - `201 Created` - Successfully created warrior
/// - `400 Bad Request` - A required field is missing or empty, or malformed body
/// - `500 Internal Server Error` - Database error, including a duplicate name
#[utoipa::path(
    post,
    path = "/warriors",
    tag = WARRIOR_TAG,
    request_body = CreateWarriorDto,
    responses(
        (status = 201, description = "Successfully created warrior", body = WarriorDto),
        (status = 400, description = "Missing required warrior fields", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_warrior(
    State(state): State<AppState>,
    payload: Result<Json<CreateWarriorDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let params = CreateWarriorParams::from_dto(payload)?;

    let service = WarriorService::new(&state.db);

    let warrior = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(warrior.into_dto())))
}

/// Delete a warrior.
///
/// Favorites pointing at the warrior are deleted with it.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `404 Not Found` - No warrior with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/warriors/{id}",
    tag = WARRIOR_TAG,
    params(
        ("id" = i32, Path, description = "Warrior ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted warrior", body = DeletedDto),
        (status = 404, description = "Warrior not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_warrior(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let service = WarriorService::new(&state.db);

    if !service.delete(id).await? {
        return Err(AppError::NotFound("Warrior not found".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(DeletedDto {
            message: format!("Warrior with id {} deleted successfully", id),
        }),
    ))
}
