use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DeletedDto, ErrorDto, MessageDto},
        favorite::{CreatedFavoriteDto, FavoriteDto},
    },
    server::{
        error::AppError,
        middleware::identity::CurrentUser,
        model::favorite::FavoriteTarget,
        service::favorite::FavoriteService,
        state::AppState,
    },
};

/// Tag for grouping favorite endpoints in OpenAPI documentation
pub static FAVORITE_TAG: &str = "favorite";

/// Get the favorites of a user.
///
/// Unknown users simply have no favorites, so this never returns 404.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user_id` - Owner whose favorites to list
///
/// # Returns
/// - `200 OK` - The user's favorites with their items, possibly an empty list
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/favorites/{id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved favorites", body = Vec<FavoriteDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    user_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(user_id) = user_id?;

    let service = FavoriteService::new(&state.db);

    let favorites = service.get_by_user_id(user_id).await?;

    Ok((
        StatusCode::OK,
        Json(
            favorites
                .into_iter()
                .map(|f| f.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Add a favorite for the current user.
///
/// `item_type` selects the kind of item. The item id is stored as given without checking
/// that such an item exists.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user` - User the favorite is created for
/// - `item_type` - One of `planet`, `warrior`, `spaceship`
/// - `item_id` - ID of the item
///
/// # Returns
/// - `201 Created` - Confirmation message with the new favorite
/// - `404 Not Found` - Unrecognized item type
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/favorites/{item_type}/{item_id}",
    tag = FAVORITE_TAG,
    params(
        ("item_type" = String, Path, description = "One of planet, warrior, spaceship"),
        ("item_id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 201, description = "Successfully added favorite", body = CreatedFavoriteDto),
        (status = 404, description = "Invalid favorite type", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_favorite(
    State(state): State<AppState>,
    user: CurrentUser,
    path: Result<Path<(String, i32)>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path((item_type, item_id)) = path?;

    let target = FavoriteTarget::parse(&item_type, item_id)?;

    let service = FavoriteService::new(&state.db);

    let favorite = service.create(user.id, target).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedFavoriteDto {
            msg: "Favorite added".to_string(),
            favorite: favorite.into_dto(),
        }),
    ))
}

/// Delete a favorite.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `404 Not Found` - No favorite with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/favorites/{id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "Favorite ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted favorite", body = DeletedDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let service = FavoriteService::new(&state.db);

    if !service.delete(id).await? {
        return Err(AppError::NotFound("Favorite not found".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(DeletedDto {
            message: format!("Favorite with id {} deleted successfully", id),
        }),
    ))
}
