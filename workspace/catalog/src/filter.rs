//! Translation of a [`PropertyFilter`] into a query condition.
//!
//! Exact and range constraints run in SQL. Name and address substrings are
//! matched in Rust by [`TextMatch`], because SQLite `LOWER` folds ASCII only.

use common::PropertyFilter;
use model::entities::property;
use sea_orm::{ColumnTrait, Condition};

/// Builds the AND of every SQL-side constraint present in `filter`.
///
/// Prices are inclusive bounds; year, owner and code are exact. Blank
/// strings, the text fields and the pagination fields add nothing here.
pub fn compose(filter: &PropertyFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(min_price) = filter.min_price {
        condition = condition.add(property::Column::Price.gte(min_price));
    }
    if let Some(max_price) = filter.max_price {
        condition = condition.add(property::Column::Price.lte(max_price));
    }
    if let Some(year) = filter.year {
        condition = condition.add(property::Column::Year.eq(year));
    }
    if let Some(owner_id) = present(&filter.owner_id) {
        condition = condition.add(property::Column::OwnerId.eq(owner_id));
    }
    if let Some(code) = present(&filter.code_internal) {
        condition = condition.add(property::Column::CodeInternal.eq(code));
    }

    condition
}

/// Case-insensitive substring constraints on name and address.
///
/// Both sides are folded with Unicode lowercase, so "Élite" and "élite"
/// match the same rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextMatch {
    name: Option<String>,
    address: Option<String>,
}

impl TextMatch {
    pub fn from_filter(filter: &PropertyFilter) -> Self {
        Self {
            name: present(&filter.name).map(str::to_lowercase),
            address: present(&filter.address).map(str::to_lowercase),
        }
    }

    /// True when no text constraint is present.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.address.is_none()
    }

    pub fn matches(&self, model: &property::Model) -> bool {
        contains_folded(&model.name, self.name.as_deref())
            && contains_folded(&model.address, self.address.as_deref())
    }
}

fn contains_folded(haystack: &str, needle: Option<&str>) -> bool {
    needle.is_none_or(|needle| haystack.to_lowercase().contains(needle))
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn model(name: &str, address: &str) -> property::Model {
        property::Model {
            id: "p".to_string(),
            owner_id: "o".to_string(),
            name: name.to_string(),
            address: address.to_string(),
            price: Decimal::ONE,
            code_internal: "PROP001".to_string(),
            year: 2020,
            image: "p.jpg".to_string(),
        }
    }

    fn text(name: Option<&str>, address: Option<&str>) -> TextMatch {
        TextMatch::from_filter(&PropertyFilter {
            name: name.map(str::to_string),
            address: address.map(str::to_string),
            ..Default::default()
        })
    }

    #[test]
    fn test_blank_strings_are_absent() {
        assert_eq!(present(&None), None);
        assert_eq!(present(&Some(String::new())), None);
        assert_eq!(present(&Some("Chía".to_string())), Some("Chía"));
        assert!(text(Some(""), Some("")).is_empty());
    }

    #[test]
    fn test_empty_filter_has_no_constraints() {
        assert!(compose(&PropertyFilter::default()).is_empty());

        let blank = PropertyFilter {
            name: Some("casa".to_string()),
            owner_id: Some(String::new()),
            page: Some(2),
            page_size: Some(10),
            ..Default::default()
        };
        assert!(compose(&blank).is_empty());
    }

    #[test]
    fn test_each_exact_or_range_field_adds_one_constraint() {
        let filter = PropertyFilter {
            name: Some("casa".to_string()),
            address: Some("bogotá".to_string()),
            min_price: Some(Decimal::ONE),
            max_price: Some(Decimal::TEN),
            year: Some(2020),
            owner_id: Some("o".to_string()),
            code_internal: Some("PROP001".to_string()),
            ..Default::default()
        };
        assert_eq!(compose(&filter).len(), 5);
    }

    #[test]
    fn test_text_match_folds_non_ascii_capitals() {
        let atico = model("Ático Élite", "Carrera 7 #70-10, Bogotá");

        for needle in ["élite", "Élite", "ático", "ÁTICO", "tico"] {
            assert!(text(Some(needle), None).matches(&atico), "{needle} should match");
        }
        assert!(text(None, Some("BOGOTÁ")).matches(&atico));
        assert!(!text(Some("elite"), None).matches(&atico));
    }

    #[test]
    fn test_text_match_requires_both_fields() {
        let casa = model("Casa en Cedritos", "Calle 147 #45-67, Bogotá");

        assert!(text(Some("casa"), Some("calle")).matches(&casa));
        assert!(!text(Some("casa"), Some("medellín")).matches(&casa));
        assert!(text(None, None).matches(&casa));
    }

    #[test]
    fn test_wildcards_are_literal() {
        let casa = model("Casa 100%", "Calle_1");

        assert!(text(Some("100%"), Some("_")).matches(&casa));
        assert!(!text(Some("%"), None).matches(&model("Casa", "Calle")));
    }
}
