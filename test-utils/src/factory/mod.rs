//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation. Defaults for unique columns
//! come from [`helpers::next_id`], so factories can be called repeatedly in one test.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let planet = factory::create_planet(&db).await?;
//! let favorite = factory::favorite::create_planet_favorite(&db, user.id, planet.id).await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `planet` - Create planet entities
//! - `spaceship` - Create spaceship entities
//! - `warrior` - Create warrior entities
//! - `favorite` - Create favorite entities, including inconsistent rows
//! - `helpers` - Unique id generation and multi-entity helpers

pub mod favorite;
pub mod helpers;
pub mod planet;
pub mod spaceship;
pub mod user;
pub mod warrior;

pub use planet::create_planet;
pub use spaceship::create_spaceship;
pub use user::{create_user, create_user_with_id};
pub use warrior::create_warrior;
