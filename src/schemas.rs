use catalog::Seeder;
use common::{
    CollectionCounts, DatabaseStatus, OwnerDto, PriceStatistics, PropertyDto, PropertyImageDto,
    PropertyTraceDto, SeedOutcome, SummaryReport,
};
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi, ToSchema};
use validator::Validate;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool
    pub db: DatabaseConnection,
    /// Fixture loader, shared so concurrent seed requests are serialized
    pub seeder: Arc<Seeder>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            seeder: Arc::new(Seeder::new()),
        }
    }
}

/// Envelope around every API response.
///
/// `count` is set on list responses. `error` carries a machine-readable
/// code and is only present when `success` is false.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[aliases(
    PropertyListResponse = ApiResponse<Vec<PropertyDto>>,
    PropertyResponse = ApiResponse<PropertyDto>,
    OwnerListResponse = ApiResponse<Vec<OwnerDto>>,
    PropertyImageListResponse = ApiResponse<Vec<PropertyImageDto>>,
    PropertyTraceListResponse = ApiResponse<Vec<PropertyTraceDto>>,
    PropertyCountResponse = ApiResponse<PropertyCount>,
    OwnerCountResponse = ApiResponse<OwnerCount>,
    PropertyImageCountResponse = ApiResponse<PropertyImageCount>,
    PropertyTraceCountResponse = ApiResponse<PropertyTraceCount>,
    StatusResponse = ApiResponse<DatabaseStatus>,
    SeedResponse = ApiResponse<SeedOutcome>,
    SummaryResponse = ApiResponse<SummaryReport>,
    ErrorResponse = ApiResponse<String>
)]
pub struct ApiResponse<T> {
    /// Success status
    pub success: bool,
    /// Response data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Number of items in `data` for list responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// Human-readable message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Error code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            count: None,
            message: None,
            error: None,
        }
    }

    /// Successful response without data.
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            count: None,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn failure(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            count: None,
            message: Some(message.into()),
            error: Some(code.into()),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// List response; `count` is the number of items.
    pub fn list(items: Vec<T>) -> Self {
        let count = items.len();
        Self {
            count: Some(count),
            ..Self::ok(items)
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyCount {
    pub total_properties: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerCount {
    pub total_owners: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyImageCount {
    pub total_images: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyTraceCount {
    pub total_traces: u64,
}

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// Query parameters for the most-expensive search
#[derive(Debug, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct ExpensiveQuery {
    /// Maximum number of properties to return (default: 5)
    #[validate(range(max = 1000))]
    pub limit: Option<u64>,
}

impl ExpensiveQuery {
    pub const DEFAULT_LIMIT: u64 = 5;

    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(Self::DEFAULT_LIMIT)
    }
}

/// Query parameters for the price-range search
#[derive(Debug, Deserialize, IntoParams, Validate)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PriceRangeQuery {
    /// Inclusive lower price bound
    #[validate(custom(function = "non_negative"))]
    #[param(value_type = Option<f64>)]
    pub min_price: Option<Decimal>,
    /// Inclusive upper price bound
    #[validate(custom(function = "non_negative"))]
    #[param(value_type = Option<f64>)]
    pub max_price: Option<Decimal>,
}

fn non_negative(value: &Decimal) -> Result<(), validator::ValidationError> {
    if *value < Decimal::ZERO {
        return Err(validator::ValidationError::new("negative_price"));
    }
    Ok(())
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::properties::get_properties,
        crate::handlers::properties::get_property,
        crate::handlers::properties::get_properties_count,
        crate::handlers::owners::get_owners,
        crate::handlers::owners::get_owners_count,
        crate::handlers::images::get_property_images,
        crate::handlers::images::get_property_images_count,
        crate::handlers::traces::get_property_traces,
        crate::handlers::traces::get_property_traces_count,
        crate::handlers::admin::get_database_status,
        crate::handlers::admin::seed_data,
        crate::handlers::admin::clear_data,
        crate::handlers::reports::get_summary_report,
        crate::handlers::search::get_expensive_properties,
        crate::handlers::search::get_properties_by_year,
        crate::handlers::search::get_properties_by_price_range,
    ),
    components(
        schemas(
            PropertyListResponse,
            PropertyResponse,
            OwnerListResponse,
            PropertyImageListResponse,
            PropertyTraceListResponse,
            PropertyCountResponse,
            OwnerCountResponse,
            PropertyImageCountResponse,
            PropertyTraceCountResponse,
            StatusResponse,
            SeedResponse,
            SummaryResponse,
            ErrorResponse,
            HealthResponse,
            PropertyCount,
            OwnerCount,
            PropertyImageCount,
            PropertyTraceCount,
            PropertyDto,
            OwnerDto,
            PropertyImageDto,
            PropertyTraceDto,
            CollectionCounts,
            DatabaseStatus,
            PriceStatistics,
            SeedOutcome,
            SummaryReport,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "properties", description = "Property listing endpoints"),
        (name = "owners", description = "Owner endpoints"),
        (name = "property-images", description = "Property image endpoints"),
        (name = "property-traces", description = "Property sale record endpoints"),
        (name = "admin", description = "Database status and seeding"),
        (name = "reports", description = "Aggregate reports"),
        (name = "search", description = "Predefined property searches"),
    ),
    info(
        title = "Real Estate API",
        description = "Read-only catalog of properties, their owners, images and sale history",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_omits_absent_fields() {
        let json = serde_json::to_value(ApiResponse::ok(7u64)).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "data": 7}));

        let json = serde_json::to_value(ApiResponse::<u64>::failure("NOT_FOUND", "gone")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"success": false, "message": "gone", "error": "NOT_FOUND"})
        );
    }

    #[test]
    fn test_list_sets_count() {
        let response = ApiResponse::list(vec!["a", "b", "c"]);
        assert_eq!(response.count, Some(3));
        assert!(response.success);

        let empty = ApiResponse::<Vec<u8>>::list(Vec::new());
        assert_eq!(empty.count, Some(0));
    }

    #[test]
    fn test_expensive_query_limit() {
        assert_eq!(ExpensiveQuery { limit: None }.limit(), 5);
        assert!(ExpensiveQuery { limit: Some(0) }.validate().is_ok());
        assert!(ExpensiveQuery { limit: Some(1000) }.validate().is_ok());
        assert!(ExpensiveQuery { limit: Some(1001) }.validate().is_err());
    }

    #[test]
    fn test_price_range_rejects_negative_bound() {
        let query = PriceRangeQuery {
            min_price: Some(Decimal::new(-5, 0)),
            max_price: None,
        };
        assert!(query.validate().is_err());
    }
}
