use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::AppError,
    middleware::identity::DEFAULT_USER_ID,
    model::user::CreateUserParams,
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then runs
/// all pending SeaORM migrations so the schema is up-to-date before the router is built.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Email of the acting user when no credentials are configured.
const FALLBACK_USER_EMAIL: &str = "admin@holocron.local";
/// Password of the acting user when no credentials are configured.
const FALLBACK_USER_PASSWORD: &str = "admin";

/// Ensures the acting user exists so favorites have a valid owner.
///
/// Requests are attributed to user id 1 (see `middleware::identity`) and `favorite.user_id`
/// references `user.id`, so the account must exist before the first favorite is added. It is
/// created from the configured credentials, or the built-in ones when none are configured.
/// Nothing happens when the id is already taken.
///
/// # Arguments
/// - `db` - Database connection
/// - `config` - Application configuration containing the optional default user
///
/// # Returns
/// - `Ok(())` - Acting user exists
/// - `Err(AppError::DbErr)` - Database error during lookup or insert
pub async fn ensure_default_user(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let repo = UserRepository::new(db);

    if repo.find_by_id(DEFAULT_USER_ID).await?.is_some() {
        return Ok(());
    }

    let (email, password) = match &config.default_user {
        Some(user) => (user.email.clone(), user.password.clone()),
        None => {
            tracing::warn!(
                "DEFAULT_USER_EMAIL/DEFAULT_USER_PASSWORD not set, seeding {} with built-in credentials",
                FALLBACK_USER_EMAIL
            );
            (
                FALLBACK_USER_EMAIL.to_string(),
                FALLBACK_USER_PASSWORD.to_string(),
            )
        }
    };

    let user = repo
        .create(CreateUserParams {
            id: Some(DEFAULT_USER_ID),
            email,
            password,
            is_active: true,
        })
        .await?;

    tracing::info!("Created default user {} with id {}", user.email, user.id);

    Ok(())
}

/// Cross-origin policy applied to every route.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
