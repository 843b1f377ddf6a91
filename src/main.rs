use dioxus_logger::tracing;
use holocron::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dioxus_logger::initialize_default();

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    startup::ensure_default_user(&db, &config).await?;

    let app = router::routes()
        .with_state(AppState::new(db))
        .layer(startup::cors_layer());

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;

    tracing::info!("Starting server on {}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
