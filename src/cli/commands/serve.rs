use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace, warn};

use super::run_migrations;
use crate::config::initialize_app_state_with_url;
use crate::router::create_router;

pub async fn serve(
    database_url: &str,
    bind_address: &str,
    skip_seed: bool,
    max_connections: u32,
) -> Result<()> {
    trace!("Entering serve function");
    info!("Real estate API starting up");
    debug!("Bind address: {}", bind_address);

    // Initialize application state
    let state = match initialize_app_state_with_url(database_url, max_connections).await {
        Ok(state) => {
            debug!("Application state initialized successfully");
            state
        }
        Err(e) => {
            error!("Failed to initialize application state: {}", e);
            return Err(e);
        }
    };

    run_migrations(&state.db).await?;

    if skip_seed {
        info!("Skipping sample data");
    } else {
        match state.seeder.seed(&state.db).await {
            Ok(outcome) if outcome.seeded => info!("Sample data loaded: {:?}", outcome),
            Ok(_) => debug!("Database already populated"),
            Err(e) => warn!("Failed to load sample data: {}", e),
        }
    }

    // Create router
    let app = create_router(state);
    debug!("Router created successfully");

    // Start server
    let listener = match TcpListener::bind(bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to address {}: {}", bind_address, e);
            return Err(e.into());
        }
    };

    info!("Real estate API running on http://{}", bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
