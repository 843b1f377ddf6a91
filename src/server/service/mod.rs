//! Business logic services.
//!
//! Services sit between controllers and repositories. They own the decisions that span more
//! than one query (expanding favorites, turning delete results into found/not found) and
//! convert storage errors into `AppError`.

pub mod favorite;
pub mod planet;
pub mod spaceship;
pub mod user;
pub mod warrior;
