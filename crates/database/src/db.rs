use log::info;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Creates a pooled database connection for the given URL
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url);
    options.sqlx_logging(false);

    info!("Connecting to the course catalog database");
    Database::connect(options).await
}

/// An in-memory SQLite database with a single pooled connection, so every
/// query sees the same data.
#[cfg(test)]
pub(crate) async fn memory_connection() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    Database::connect(options)
        .await
        .expect("failed to open in-memory sqlite")
}
