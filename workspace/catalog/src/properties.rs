use common::{PropertyDto, PropertyFilter};
use model::entities::property;
use rust_decimal::Decimal;
use sea_orm::{
    ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use tracing::debug;

use crate::filter::{self, TextMatch};
use crate::{Result, new_identity};

/// A property that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProperty {
    pub owner_id: String,
    pub name: String,
    pub address: String,
    pub price: Decimal,
    pub code_internal: String,
    pub year: i32,
    pub image: String,
}

impl NewProperty {
    fn into_model(self) -> property::Model {
        property::Model {
            id: new_identity(),
            owner_id: self.owner_id,
            name: self.name,
            address: self.address,
            price: self.price,
            code_internal: self.code_internal,
            year: self.year,
            image: self.image,
        }
    }
}

pub async fn count<C: ConnectionTrait>(db: &C) -> Result<u64> {
    Ok(property::Entity::find().count(db).await?)
}

/// Every property, in storage order.
pub async fn list_all<C: ConnectionTrait>(db: &C) -> Result<Vec<PropertyDto>> {
    list_filtered(db, &PropertyFilter::default()).await
}

/// Properties matching every constraint present in `filter`.
///
/// The result is windowed only when the filter carries a page size. Exact
/// and range constraints run in SQL; name and address are then matched in
/// Rust, and the window is applied after that match.
pub async fn list_filtered<C: ConnectionTrait>(
    db: &C,
    filter: &PropertyFilter,
) -> Result<Vec<PropertyDto>> {
    let query = property::Entity::find().filter(filter::compose(filter));
    let text = TextMatch::from_filter(filter);

    let properties = match (filter.pagination(), text.is_empty()) {
        (Some((page, page_size)), true) => {
            debug!("Fetching property page {} of size {}", page + 1, page_size);
            query.paginate(db, page_size).fetch_page(page).await?
        }
        (None, true) => query.all(db).await?,
        (window, false) => {
            let matched = query
                .all(db)
                .await?
                .into_iter()
                .filter(|p| text.matches(p));
            match window {
                Some((page, page_size)) => {
                    debug!("Windowing text matches to page {} of size {}", page + 1, page_size);
                    matched
                        .skip(page.saturating_mul(page_size) as usize)
                        .take(page_size as usize)
                        .collect()
                }
                None => matched.collect(),
            }
        }
    };
    debug!("Filter matched {} properties", properties.len());

    Ok(properties.into_iter().map(PropertyDto::from).collect())
}

/// Single property by identity; `None` when no such property exists.
pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: &str) -> Result<Option<PropertyDto>> {
    let property = property::Entity::find_by_id(id.to_owned()).one(db).await?;
    Ok(property.map(PropertyDto::from))
}

/// At most `limit` properties, highest price first.
pub async fn most_expensive<C: ConnectionTrait>(db: &C, limit: u64) -> Result<Vec<PropertyDto>> {
    let properties = property::Entity::find()
        .order_by_desc(property::Column::Price)
        .limit(limit)
        .all(db)
        .await?;
    Ok(properties.into_iter().map(PropertyDto::from).collect())
}

/// Stores `drafts` and returns them with their new identities, in order.
/// Owner identities are stored as given.
pub async fn insert_many<C: ConnectionTrait>(
    db: &C,
    drafts: Vec<NewProperty>,
) -> Result<Vec<PropertyDto>> {
    if drafts.is_empty() {
        return Ok(Vec::new());
    }

    let models: Vec<property::Model> = drafts.into_iter().map(NewProperty::into_model).collect();
    property::Entity::insert_many(models.iter().cloned().map(property::ActiveModel::from))
        .exec_without_returning(db)
        .await?;
    debug!("Inserted {} properties", models.len());

    Ok(models.into_iter().map(PropertyDto::from).collect())
}
