use axum::{extract::State, response::Json};
use catalog::report;
use chrono::Utc;
use common::{DatabaseStatus, SeedOutcome};
use sea_orm::{ConnectionTrait, DbBackend};
use tracing::{info, instrument, trace};

use crate::error::ApiError;
use crate::schemas::{ApiResponse, AppState, ErrorResponse, SeedResponse, StatusResponse};

fn backend_name(backend: DbBackend) -> &'static str {
    match backend {
        DbBackend::Sqlite => "sqlite",
        DbBackend::Postgres => "postgres",
        DbBackend::MySql => "mysql",
    }
}

/// Record counts of every collection
#[utoipa::path(
    get,
    path = "/api/v1/status",
    tag = "admin",
    responses(
        (status = 200, description = "Database status", body = StatusResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_database_status(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DatabaseStatus>>, ApiError> {
    let collections = report::collection_counts(&state.db).await?;
    trace!("Collection counts: {:?}", collections);

    Ok(Json(ApiResponse::ok(DatabaseStatus {
        database: backend_name(state.db.get_database_backend()).to_string(),
        timestamp: Utc::now(),
        collections,
        total_records: collections.total(),
    })))
}

/// Load the demonstration dataset into an empty database
#[utoipa::path(
    post,
    path = "/api/v1/seed-data",
    tag = "admin",
    responses(
        (status = 200, description = "Seed finished or skipped; see `data.seeded`", body = SeedResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn seed_data(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<SeedOutcome>>, ApiError> {
    let outcome = state.seeder.seed(&state.db).await?;

    let message = if outcome.seeded {
        info!("Sample data created");
        "Sample data created successfully"
    } else {
        "Database already contains data, seeding skipped"
    };
    Ok(Json(ApiResponse::ok(outcome).with_message(message)))
}

/// Placeholder for bulk deletion; performs no writes
#[utoipa::path(
    delete,
    path = "/api/v1/clear-data",
    tag = "admin",
    responses(
        (status = 200, description = "Clearing is not implemented", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn clear_data() -> Json<ApiResponse<()>> {
    Json(ApiResponse::message_only("Clearing data is not implemented"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_names() {
        assert_eq!(backend_name(DbBackend::Sqlite), "sqlite");
        assert_eq!(backend_name(DbBackend::Postgres), "postgres");
    }
}
