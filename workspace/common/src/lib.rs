//! Common transport-layer types shared between the API server and its clients.
//! These structs are the JSON shapes of the listing endpoints, the property
//! filter accepted on the query string, and the aggregate reports.

mod filter;
mod listing;
mod report;

pub use filter::PropertyFilter;
pub use listing::{OwnerDto, PropertyDto, PropertyImageDto, PropertyTraceDto};
pub use report::{CollectionCounts, DatabaseStatus, PriceStatistics, SeedOutcome, SummaryReport};

/// Currency every price in the catalog is expressed in.
pub const CURRENCY: &str = "COP";
