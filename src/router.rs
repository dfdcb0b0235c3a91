use crate::handlers::{
    admin::{clear_data, get_database_status, seed_data},
    health::health_check,
    images::{get_property_images, get_property_images_count},
    owners::{get_owners, get_owners_count},
    properties::{get_properties, get_properties_count, get_property},
    reports::get_summary_report,
    search::{get_expensive_properties, get_properties_by_price_range, get_properties_by_year},
    traces::{get_property_traces, get_property_traces_count},
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{delete, get, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Property routes
        .route("/api/v1/properties", get(get_properties))
        .route("/api/v1/properties/count", get(get_properties_count))
        .route("/api/v1/properties/:id", get(get_property))
        // Owner routes
        .route("/api/v1/owners", get(get_owners))
        .route("/api/v1/owners/count", get(get_owners_count))
        // Image and sale record routes
        .route("/api/v1/property-images", get(get_property_images))
        .route("/api/v1/property-images/count", get(get_property_images_count))
        .route("/api/v1/property-traces", get(get_property_traces))
        .route("/api/v1/property-traces/count", get(get_property_traces_count))
        // Administration
        .route("/api/v1/status", get(get_database_status))
        .route("/api/v1/seed-data", post(seed_data))
        .route("/api/v1/clear-data", delete(clear_data))
        // Reports and searches
        .route("/api/v1/reports/summary", get(get_summary_report))
        .route("/api/v1/search/expensive", get(get_expensive_properties))
        .route("/api/v1/search/by-year/:year", get(get_properties_by_year))
        .route("/api/v1/search/price-range", get(get_properties_by_price_range))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
