//! HTTP request handlers.
//!
//! Controllers extract path and body input, turn DTOs into validated parameters, call the
//! matching service and convert the result back into a DTO with the right status code.
//! Every handler is annotated with `utoipa::path` so the router can build the OpenAPI
//! document and the `/` route listing from it.

pub mod favorite;
pub mod planet;
pub mod sitemap;
pub mod spaceship;
pub mod user;
pub mod warrior;

#[cfg(test)]
mod test;
