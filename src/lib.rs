//! Holocron: a REST API for cataloguing planets, warriors and spaceships and tracking which of
//! them a user has marked as a favorite.
//!
//! - [`model`] holds the DTOs that make up the JSON contract of the API.
//! - [`server`] holds the Axum backend: routing, controllers, services and data access.

pub mod model;
pub mod server;
