//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Factories use it to build names and emails that never collide with each other,
/// which matters because those columns are unique.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user with a favorite planet.
///
/// # Returns
/// - `Ok((user, planet, favorite))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_favorite_planet(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::planet::Model,
        entity::favorite::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let planet = crate::factory::planet::create_planet(db).await?;
    let favorite = crate::factory::favorite::create_planet_favorite(db, user.id, planet.id).await?;

    Ok((user, planet, favorite))
}
