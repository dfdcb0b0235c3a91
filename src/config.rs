use anyhow::Result;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::{debug, info};

use crate::schemas::AppState;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://realestate.db?mode=rwc";

/// Open a connection pool with at most `max_connections` connections.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<DatabaseConnection> {
    info!("Connecting to database: {}", database_url);

    let mut options = ConnectOptions::new(database_url.to_owned());
    options
        .max_connections(max_connections)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);
    debug!("Connection options: {:?}", options);

    Ok(Database::connect(options).await?)
}

/// Initialize application state for the given database
pub async fn initialize_app_state_with_url(
    database_url: &str,
    max_connections: u32,
) -> Result<AppState> {
    let db = connect(database_url, max_connections).await?;
    Ok(AppState::new(db))
}
