use axum::{extract::State, response::Json};
use catalog::owners;
use common::OwnerDto;
use tracing::{debug, info, instrument};

use crate::error::ApiError;
use crate::schemas::{
    ApiResponse, AppState, ErrorResponse, OwnerCount, OwnerCountResponse, OwnerListResponse,
};

/// List all owners
#[utoipa::path(
    get,
    path = "/api/v1/owners",
    tag = "owners",
    responses(
        (status = 200, description = "Owners retrieved successfully", body = OwnerListResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_owners(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<OwnerDto>>>, ApiError> {
    let all = owners::list_all(&state.db).await?;
    info!("Retrieved {} owners", all.len());

    Ok(Json(ApiResponse::list(all)))
}

/// Count all owners
#[utoipa::path(
    get,
    path = "/api/v1/owners/count",
    tag = "owners",
    responses(
        (status = 200, description = "Owner count", body = OwnerCountResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_owners_count(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<OwnerCount>>, ApiError> {
    let total_owners = owners::count(&state.db).await?;
    debug!("Counted {} owners", total_owners);

    Ok(Json(ApiResponse::ok(OwnerCount { total_owners })))
}
