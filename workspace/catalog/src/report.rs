use chrono::{DateTime, Utc};
use common::{CURRENCY, CollectionCounts, PriceStatistics, SummaryReport};
use model::entities::property;
use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, EntityTrait, QuerySelect};
use tracing::debug;

use crate::{Result, images, owners, properties, traces};

/// Counts of all four collections.
pub async fn collection_counts<C: ConnectionTrait>(db: &C) -> Result<CollectionCounts> {
    Ok(CollectionCounts {
        properties: properties::count(db).await?,
        owners: owners::count(db).await?,
        property_images: images::count(db).await?,
        property_traces: traces::count(db).await?,
    })
}

/// Minimum, maximum and mean price over every property.
pub async fn price_statistics<C: ConnectionTrait>(db: &C) -> Result<PriceStatistics> {
    let prices: Vec<Decimal> = property::Entity::find()
        .select_only()
        .column(property::Column::Price)
        .into_tuple()
        .all(db)
        .await?;
    debug!("Computing price statistics over {} properties", prices.len());

    Ok(statistics(&prices))
}

fn statistics(prices: &[Decimal]) -> PriceStatistics {
    let (Some(minimum), Some(maximum)) = (prices.iter().min(), prices.iter().max()) else {
        return PriceStatistics {
            average: Decimal::ZERO,
            maximum: Decimal::ZERO,
            minimum: Decimal::ZERO,
            currency: CURRENCY.to_string(),
        };
    };

    let sum: Decimal = prices.iter().sum();
    PriceStatistics {
        average: (sum / Decimal::from(prices.len())).round_dp(2),
        maximum: *maximum,
        minimum: *minimum,
        currency: CURRENCY.to_string(),
    }
}

pub async fn summary<C: ConnectionTrait>(
    db: &C,
    generated_at: DateTime<Utc>,
) -> Result<SummaryReport> {
    let counts = collection_counts(db).await?;
    let price_statistics = price_statistics(db).await?;

    Ok(SummaryReport {
        total_properties: counts.properties,
        total_owners: counts.owners,
        total_images: counts.property_images,
        total_traces: counts.property_traces,
        price_statistics,
        generated_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Seeder;
    use crate::testing::setup_db;

    #[test]
    fn test_statistics_of_empty_set_are_zero() {
        let stats = statistics(&[]);
        assert_eq!(stats.average, Decimal::ZERO);
        assert_eq!(stats.maximum, Decimal::ZERO);
        assert_eq!(stats.minimum, Decimal::ZERO);
        assert_eq!(stats.currency, "COP");
    }

    #[test]
    fn test_average_is_rounded_to_cents() {
        let stats = statistics(&[Decimal::new(1, 0), Decimal::new(1, 0), Decimal::new(2, 0)]);
        assert_eq!(stats.average, Decimal::new(133, 2));
        assert_eq!(stats.minimum, Decimal::ONE);
        assert_eq!(stats.maximum, Decimal::TWO);
    }

    #[tokio::test]
    async fn test_summary_of_empty_store() {
        let db = setup_db().await.unwrap();
        let now = Utc::now();

        let report = summary(&db, now).await.unwrap();
        assert_eq!(report.total_properties, 0);
        assert_eq!(report.total_owners, 0);
        assert_eq!(report.price_statistics.average, Decimal::ZERO);
        assert_eq!(report.generated_at, now);
    }

    #[tokio::test]
    async fn test_summary_of_fixture() {
        let db = setup_db().await.unwrap();
        Seeder::new().seed(&db).await.unwrap();

        let counts = collection_counts(&db).await.unwrap();
        assert_eq!(counts.total(), 20);

        let report = summary(&db, Utc::now()).await.unwrap();
        assert_eq!(report.total_properties, 5);
        assert_eq!(report.total_owners, 3);
        assert_eq!(report.total_images, 8);
        assert_eq!(report.total_traces, 4);
        assert_eq!(report.price_statistics.minimum, Decimal::new(180_000_000, 0));
        assert_eq!(report.price_statistics.maximum, Decimal::new(850_000_000, 0));
        assert_eq!(report.price_statistics.average, Decimal::new(416_000_000, 0));
    }
}
