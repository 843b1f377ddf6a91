//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and transformed
//! to DTOs at the controller boundary. Parameter types carry validated input from controllers
//! into services; building one from a DTO is where presence checks happen.

pub mod favorite;
pub mod planet;
pub mod spaceship;
pub mod user;
pub mod warrior;

/// Returns the value if it is a non-empty string.
///
/// Missing, `null` and `""` are all treated as absent.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
