use axum::{extract::State, response::Json};
use catalog::traces;
use common::PropertyTraceDto;
use tracing::{debug, info, instrument};

use crate::error::ApiError;
use crate::schemas::{
    ApiResponse, AppState, ErrorResponse, PropertyTraceCount, PropertyTraceCountResponse,
    PropertyTraceListResponse,
};

/// List all property sale records
#[utoipa::path(
    get,
    path = "/api/v1/property-traces",
    tag = "property-traces",
    responses(
        (status = 200, description = "Sale records retrieved successfully", body = PropertyTraceListResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_property_traces(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<PropertyTraceDto>>>, ApiError> {
    let all = traces::list_all(&state.db).await?;
    info!("Retrieved {} property traces", all.len());

    Ok(Json(ApiResponse::list(all)))
}

/// Count all property sale records
#[utoipa::path(
    get,
    path = "/api/v1/property-traces/count",
    tag = "property-traces",
    responses(
        (status = 200, description = "Sale record count", body = PropertyTraceCountResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_property_traces_count(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<PropertyTraceCount>>, ApiError> {
    let total_traces = traces::count(&state.db).await?;
    debug!("Counted {} property traces", total_traces);

    Ok(Json(ApiResponse::ok(PropertyTraceCount { total_traces })))
}
