use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Document counts of the four collections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollectionCounts {
    pub properties: u64,
    pub owners: u64,
    pub property_images: u64,
    pub property_traces: u64,
}

impl CollectionCounts {
    /// Sum over all collections.
    pub fn total(&self) -> u64 {
        self.properties + self.owners + self.property_images + self.property_traces
    }
}

/// Snapshot of the store, returned by the status endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseStatus {
    /// Storage backend name
    pub database: String,
    pub timestamp: DateTime<Utc>,
    pub collections: CollectionCounts,
    pub total_records: u64,
}

/// Price aggregates over the unfiltered property set.
///
/// All values are zero when there are no properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PriceStatistics {
    #[schema(value_type = String)]
    pub average: Decimal,
    #[schema(value_type = String)]
    pub maximum: Decimal,
    #[schema(value_type = String)]
    pub minimum: Decimal,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummaryReport {
    pub total_properties: u64,
    pub total_owners: u64,
    pub total_images: u64,
    pub total_traces: u64,
    pub price_statistics: PriceStatistics,
    pub generated_at: DateTime<Utc>,
}

/// Result of a seeding request.
///
/// `seeded` is false when the store already held owners; the counts are
/// then all zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeedOutcome {
    pub seeded: bool,
    pub owners: usize,
    pub properties: usize,
    pub images: usize,
    pub traces: usize,
}
