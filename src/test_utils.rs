pub mod test_utils {
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use catalog::Seeder;
    use chrono::{TimeZone, Utc};
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{Database, DatabaseConnection};
    use std::sync::Arc;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Create an in-memory SQLite database for testing
    pub async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to connect to in-memory database");

        // Run migrations
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        db
    }

    /// AppState over an empty database, with a seeder on a fixed clock
    pub async fn setup_test_app_state() -> AppState {
        let db = setup_test_db().await;
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

        AppState {
            db,
            seeder: Arc::new(Seeder::with_now(now)),
        }
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is taken from RUST_LOG, defaulting to WARN.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| level.parse::<Level>().ok())
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app over an empty database
    pub async fn setup_test_app() -> Router {
        let _guard = init_test_tracing();

        let state = setup_test_app_state().await;
        create_router(state)
    }

    /// Create axum app over a database holding the sample data
    pub async fn setup_seeded_app() -> Router {
        let _guard = init_test_tracing();

        let state = setup_test_app_state().await;
        state
            .seeder
            .seed(&state.db)
            .await
            .expect("Failed to seed test database");
        create_router(state)
    }
}
