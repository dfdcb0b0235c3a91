use axum::{extract::State, response::Json};
use catalog::images;
use common::PropertyImageDto;
use tracing::{debug, info, instrument};

use crate::error::ApiError;
use crate::schemas::{
    ApiResponse, AppState, ErrorResponse, PropertyImageCount, PropertyImageCountResponse,
    PropertyImageListResponse,
};

/// List all property images
#[utoipa::path(
    get,
    path = "/api/v1/property-images",
    tag = "property-images",
    responses(
        (status = 200, description = "Images retrieved successfully", body = PropertyImageListResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_property_images(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<PropertyImageDto>>>, ApiError> {
    let all = images::list_all(&state.db).await?;
    info!("Retrieved {} property images", all.len());

    Ok(Json(ApiResponse::list(all)))
}

/// Count all property images
#[utoipa::path(
    get,
    path = "/api/v1/property-images/count",
    tag = "property-images",
    responses(
        (status = 200, description = "Image count", body = PropertyImageCountResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_property_images_count(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<PropertyImageCount>>, ApiError> {
    let total_images = images::count(&state.db).await?;
    debug!("Counted {} property images", total_images);

    Ok(Json(ApiResponse::ok(PropertyImageCount { total_images })))
}
