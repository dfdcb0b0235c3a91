use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use axum_valid::Valid;
use catalog::properties;
use common::{PropertyDto, PropertyFilter};
use tracing::{debug, info, instrument, trace};

use crate::error::ApiError;
use crate::schemas::{
    ApiResponse, AppState, ErrorResponse, PropertyCount, PropertyCountResponse,
    PropertyListResponse, PropertyResponse,
};

/// List properties matching the optional filter
#[utoipa::path(
    get,
    path = "/api/v1/properties",
    tag = "properties",
    params(PropertyFilter),
    responses(
        (status = 200, description = "Properties retrieved successfully", body = PropertyListResponse),
        (status = 400, description = "Invalid filter"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_properties(
    State(state): State<AppState>,
    Valid(Query(filter)): Valid<Query<PropertyFilter>>,
) -> Result<Json<ApiResponse<Vec<PropertyDto>>>, ApiError> {
    trace!("Entering get_properties function");

    let found = properties::list_filtered(&state.db, &filter).await?;
    info!("Retrieved {} properties", found.len());

    Ok(Json(ApiResponse::list(found)))
}

/// Get a single property by its identity
#[utoipa::path(
    get,
    path = "/api/v1/properties/{id}",
    tag = "properties",
    params(
        ("id" = String, Path, description = "Property identity")
    ),
    responses(
        (status = 200, description = "Property retrieved successfully", body = PropertyResponse),
        (status = 404, description = "Property not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<PropertyDto>>, ApiError> {
    debug!("Fetching property with ID: {}", id);

    match properties::find_by_id(&state.db, &id).await? {
        Some(property) => Ok(Json(ApiResponse::ok(property))),
        None => {
            debug!("Property with ID {} not found", id);
            Err(ApiError::NotFound(format!("Property with ID {} not found", id)))
        }
    }
}

/// Count all properties
#[utoipa::path(
    get,
    path = "/api/v1/properties/count",
    tag = "properties",
    responses(
        (status = 200, description = "Property count", body = PropertyCountResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_properties_count(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<PropertyCount>>, ApiError> {
    let total_properties = properties::count(&state.db).await?;
    debug!("Counted {} properties", total_properties);

    Ok(Json(ApiResponse::ok(PropertyCount { total_properties })))
}
