//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications;
//! the same document drives the `/` route listing and the Swagger UI at `/docs`.

use axum::{routing::get, Router};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, state::AppState};

/// Builds the application's HTTP router with all API endpoints.
///
/// # Registered Endpoints
/// - `GET /` - Listing of every route below
/// - `GET /users` - All users with their favorites
/// - `GET|POST /planets`, `GET|DELETE /planets/{id}`
/// - `GET|POST /warriors`, `GET|DELETE /warriors/{id}`
/// - `GET|POST /spaceships`, `GET|DELETE /spaceships/{id}`
/// - `GET /favorites/{id}` - Favorites of the user with that id
/// - `DELETE /favorites/{id}` - Delete the favorite with that id
/// - `POST /favorites/{item_type}/{item_id}` - Add a favorite for the current user
///
/// Swagger UI is served at `/docs` with the raw document at `/docs/openapi.json`.
///
/// # Returns
/// An Axum `Router<AppState>` ready to receive its state.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Holocron API"), tags(
        (name = controller::user::USER_TAG, description = "User API routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet API routes"),
        (name = controller::warrior::WARRIOR_TAG, description = "Warrior API routes"),
        (name = controller::spaceship::SPACESHIP_TAG, description = "Spaceship API routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::user::get_users))
        .routes(routes!(
            controller::planet::get_planets,
            controller::planet::create_planet
        ))
        .routes(routes!(
            controller::planet::get_planet_by_id,
            controller::planet::delete_planet
        ))
        .routes(routes!(
            controller::warrior::get_warriors,
            controller::warrior::create_warrior
        ))
        .routes(routes!(
            controller::warrior::get_warrior_by_id,
            controller::warrior::delete_warrior
        ))
        .routes(routes!(
            controller::spaceship::get_spaceships,
            controller::spaceship::create_spaceship
        ))
        .routes(routes!(
            controller::spaceship::get_spaceship_by_id,
            controller::spaceship::delete_spaceship
        ))
        .routes(routes!(
            controller::favorite::get_user_favorites,
            controller::favorite::delete_favorite
        ))
        .routes(routes!(controller::favorite::create_favorite))
        .split_for_parts();

    let sitemap = Arc::new(controller::sitemap::build_sitemap(&api));

    routes
        .route(
            "/",
            get(move || controller::sitemap::get_sitemap(sitemap.clone())),
        )
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", api))
}
