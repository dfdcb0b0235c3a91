use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use axum_valid::Valid;
use catalog::properties;
use common::{PropertyDto, PropertyFilter};
use tracing::{debug, instrument};

use crate::error::ApiError;
use crate::schemas::{
    ApiResponse, AppState, ErrorResponse, ExpensiveQuery, PriceRangeQuery, PropertyListResponse,
};

/// Most expensive properties, highest price first
#[utoipa::path(
    get,
    path = "/api/v1/search/expensive",
    tag = "search",
    params(ExpensiveQuery),
    responses(
        (status = 200, description = "Properties ordered by descending price", body = PropertyListResponse),
        (status = 400, description = "Limit out of range"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_expensive_properties(
    State(state): State<AppState>,
    Valid(Query(query)): Valid<Query<ExpensiveQuery>>,
) -> Result<Json<ApiResponse<Vec<PropertyDto>>>, ApiError> {
    let limit = query.limit();
    debug!("Fetching the {} most expensive properties", limit);

    let found = properties::most_expensive(&state.db, limit).await?;
    Ok(Json(ApiResponse::list(found)))
}

/// Properties built in the given year
#[utoipa::path(
    get,
    path = "/api/v1/search/by-year/{year}",
    tag = "search",
    params(
        ("year" = i32, Path, description = "Construction year")
    ),
    responses(
        (status = 200, description = "Properties built in the year", body = PropertyListResponse),
        (status = 400, description = "Year is not an integer"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_properties_by_year(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> Result<Json<ApiResponse<Vec<PropertyDto>>>, ApiError> {
    let found = properties::list_filtered(&state.db, &PropertyFilter::by_year(year)).await?;
    debug!("Found {} properties built in {}", found.len(), year);

    Ok(Json(
        ApiResponse::list(found).with_message(format!("Properties built in {}", year)),
    ))
}

/// Properties priced within an inclusive range
#[utoipa::path(
    get,
    path = "/api/v1/search/price-range",
    tag = "search",
    params(PriceRangeQuery),
    responses(
        (status = 200, description = "Properties within the range", body = PropertyListResponse),
        (status = 400, description = "Negative or inverted price bounds", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_properties_by_price_range(
    State(state): State<AppState>,
    Valid(Query(range)): Valid<Query<PriceRangeQuery>>,
) -> Result<Json<ApiResponse<Vec<PropertyDto>>>, ApiError> {
    if let (Some(min), Some(max)) = (range.min_price, range.max_price) {
        if min > max {
            return Err(ApiError::BadRequest(format!(
                "minPrice {} is greater than maxPrice {}",
                min, max
            )));
        }
    }

    let filter = PropertyFilter::by_price(range.min_price, range.max_price);
    let found = properties::list_filtered(&state.db, &filter).await?;
    debug!("Found {} properties in price range", found.len());

    let bound = |value: Option<rust_decimal::Decimal>| {
        value.map_or_else(|| "any".to_string(), |v| v.to_string())
    };
    let message = format!(
        "Properties priced from {} to {}",
        bound(range.min_price),
        bound(range.max_price)
    );
    Ok(Json(ApiResponse::list(found).with_message(message)))
}
