use axum::{extract::State, response::Json};
use catalog::report;
use chrono::Utc;
use common::SummaryReport;
use tracing::{debug, instrument};

use crate::error::ApiError;
use crate::schemas::{ApiResponse, AppState, ErrorResponse, SummaryResponse};

/// Collection totals and price statistics over all properties
#[utoipa::path(
    get,
    path = "/api/v1/reports/summary",
    tag = "reports",
    responses(
        (status = 200, description = "Summary report", body = SummaryResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_summary_report(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<SummaryReport>>, ApiError> {
    let summary = report::summary(&state.db, Utc::now()).await?;
    debug!(
        "Summary over {} properties, average price {}",
        summary.total_properties, summary.price_statistics.average
    );

    Ok(Json(ApiResponse::ok(summary)))
}
