use chrono::{DateTime, Utc};
use common::PropertyTraceDto;
use model::entities::property_trace;
use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait};
use tracing::debug;

use crate::{Result, new_identity};

/// A sale record that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPropertyTrace {
    pub property_id: String,
    pub date_sale: DateTime<Utc>,
    pub name: String,
    pub value: Decimal,
    pub tax: Decimal,
}

impl NewPropertyTrace {
    fn into_model(self) -> property_trace::Model {
        property_trace::Model {
            id: new_identity(),
            property_id: self.property_id,
            date_sale: self.date_sale,
            name: self.name,
            value: self.value,
            tax: self.tax,
        }
    }
}

pub async fn count<C: ConnectionTrait>(db: &C) -> Result<u64> {
    Ok(property_trace::Entity::find().count(db).await?)
}

pub async fn list_all<C: ConnectionTrait>(db: &C) -> Result<Vec<PropertyTraceDto>> {
    let traces = property_trace::Entity::find().all(db).await?;
    debug!("Loaded {} property traces", traces.len());
    Ok(traces.into_iter().map(PropertyTraceDto::from).collect())
}

pub async fn insert_many<C: ConnectionTrait>(
    db: &C,
    drafts: Vec<NewPropertyTrace>,
) -> Result<Vec<PropertyTraceDto>> {
    if drafts.is_empty() {
        return Ok(Vec::new());
    }

    let models: Vec<property_trace::Model> =
        drafts.into_iter().map(NewPropertyTrace::into_model).collect();
    property_trace::Entity::insert_many(models.iter().cloned().map(property_trace::ActiveModel::from))
        .exec_without_returning(db)
        .await?;
    debug!("Inserted {} property traces", models.len());

    Ok(models.into_iter().map(PropertyTraceDto::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::setup_db;
    use chrono::TimeZone;

    #[tokio::test]
    async fn test_insert_and_list() {
        let db = setup_db().await.unwrap();
        let sold_at = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();

        let stored = insert_many(
            &db,
            vec![NewPropertyTrace {
                property_id: "p1".to_string(),
                date_sale: sold_at,
                name: "Compra".to_string(),
                value: Decimal::new(320_000_000, 0),
                tax: Decimal::new(16_000_000, 0),
            }],
        )
        .await
        .unwrap();

        let listed = list_all(&db).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, stored[0].id);
        assert_eq!(listed[0].date_sale, sold_at);
        assert_eq!(listed[0].tax, Decimal::new(16_000_000, 0));
        assert_eq!(count(&db).await.unwrap(), 1);
    }
}
