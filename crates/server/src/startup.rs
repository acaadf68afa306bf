use crate::{
    config::{Config, ConfigError, SchemaMode},
    routes,
    state::AppState,
    utils::shutdown::shutdown_signal,
};
use axum::Router;
use database::{
    db::create_connection,
    error::CourseError,
    services::{course::CourseRepository, schema::SchemaService},
};
use log::info;
use migration::{Migrator, MigratorTrait};
use sea_orm::{DatabaseConnection, DbErr};
use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::TcpListener;

/// Anything that stops the service from coming up. All of these are fatal.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to connect to the database: {0}")]
    Connect(#[source] DbErr),

    #[error("failed to initialize the course table: {0}")]
    Schema(#[source] CourseError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Prepares the `courses` table according to the configured mode
pub async fn initialize_schema(
    courses: &CourseRepository,
    mode: SchemaMode,
) -> Result<(), CourseError> {
    let db = courses.connection();

    match mode {
        SchemaMode::Reset => {
            info!("Resetting the course table");
            SchemaService::reset(db).await?;
        }
        SchemaMode::Migrate => {
            info!("Applying pending migrations");
            Migrator::up(db, None).await?;

            if courses.count().await? == 0 {
                SchemaService::seed(db).await?;
            } else {
                info!("Course table already populated, skipping seed");
            }
        }
    }

    Ok(())
}

/// Initializes the schema and builds the router around the repository.
/// Nothing is served if the schema cannot be prepared.
pub async fn build_app(
    db: DatabaseConnection,
    mode: SchemaMode,
    project_id: String,
) -> Result<Router, StartupError> {
    let courses = CourseRepository::new(db);

    initialize_schema(&courses, mode)
        .await
        .map_err(StartupError::Schema)?;

    Ok(routes::router(AppState::new(courses, project_id)))
}

/// Connects, initializes the schema, then serves until a shutdown signal.
/// The listener is only bound once the schema is ready.
pub async fn serve(config: Config) -> Result<(), StartupError> {
    let db = create_connection(&config.database_url)
        .await
        .map_err(StartupError::Connect)?;

    let app = build_app(db, config.schema_mode, config.project_id).await?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;
    info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)
}
