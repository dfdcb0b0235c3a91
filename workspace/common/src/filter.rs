use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use validator::{Validate, ValidationError};

/// Optional constraints for listing properties.
///
/// Every field may be absent; an absent field places no constraint on the
/// result. Present fields are combined with AND. Empty strings are treated
/// the same as absent ones.
///
/// Pagination is opt-in: the result is windowed only when `pageSize` is
/// given, in which case `page` (1-based, default 1) selects the window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, IntoParams, Validate)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PropertyFilter {
    /// Case-insensitive substring of the property name
    pub name: Option<String>,
    /// Case-insensitive substring of the property address
    pub address: Option<String>,
    /// Inclusive lower price bound
    #[validate(custom(function = "non_negative"))]
    #[param(value_type = Option<f64>)]
    pub min_price: Option<Decimal>,
    /// Inclusive upper price bound
    #[validate(custom(function = "non_negative"))]
    #[param(value_type = Option<f64>)]
    pub max_price: Option<Decimal>,
    /// Exact construction year
    pub year: Option<i32>,
    /// Exact owner identity
    pub owner_id: Option<String>,
    /// Exact internal code
    pub code_internal: Option<String>,
    /// Page number (default: 1), only used together with `pageSize`
    #[validate(range(min = 1, max = 10000))]
    pub page: Option<u64>,
    /// Page size; enables pagination when present
    #[validate(range(min = 1, max = 1000))]
    pub page_size: Option<u64>,
}

impl PropertyFilter {
    /// Filter matching only properties built in `year`.
    pub fn by_year(year: i32) -> Self {
        Self {
            year: Some(year),
            ..Default::default()
        }
    }

    /// Filter matching properties priced within the inclusive range.
    pub fn by_price(min_price: Option<Decimal>, max_price: Option<Decimal>) -> Self {
        Self {
            min_price,
            max_price,
            ..Default::default()
        }
    }

    /// Returns `(page_index, page_size)` with a zero-based index when
    /// pagination was requested.
    pub fn pagination(&self) -> Option<(u64, u64)> {
        self.page_size
            .map(|size| (self.page.unwrap_or(1).saturating_sub(1), size))
    }
}

fn non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO {
        return Err(ValidationError::new("negative_price"));
    }
    Ok(())
}
