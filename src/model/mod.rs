//! Data transfer objects shared by every endpoint.
//!
//! These types define the exact JSON shapes returned by the API. Domain models in
//! `server::model` convert into them at the controller boundary via `into_dto`.

pub mod api;
pub mod favorite;
pub mod planet;
pub mod spaceship;
pub mod user;
pub mod warrior;
