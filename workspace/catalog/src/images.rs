use common::PropertyImageDto;
use model::entities::property_image;
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait};
use tracing::debug;

use crate::{Result, new_identity};

/// An image that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPropertyImage {
    pub property_id: String,
    pub file: String,
    pub enabled: bool,
}

impl NewPropertyImage {
    /// Enabled image of `property_id`.
    pub fn enabled(property_id: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            property_id: property_id.into(),
            file: file.into(),
            enabled: true,
        }
    }

    fn into_model(self) -> property_image::Model {
        property_image::Model {
            id: new_identity(),
            property_id: self.property_id,
            file: self.file,
            enabled: self.enabled,
        }
    }
}

pub async fn count<C: ConnectionTrait>(db: &C) -> Result<u64> {
    Ok(property_image::Entity::find().count(db).await?)
}

pub async fn list_all<C: ConnectionTrait>(db: &C) -> Result<Vec<PropertyImageDto>> {
    let images = property_image::Entity::find().all(db).await?;
    debug!("Loaded {} property images", images.len());
    Ok(images.into_iter().map(PropertyImageDto::from).collect())
}

/// Stores `drafts` and returns them with their new identities. The
/// referenced properties are not checked.
pub async fn insert_many<C: ConnectionTrait>(
    db: &C,
    drafts: Vec<NewPropertyImage>,
) -> Result<Vec<PropertyImageDto>> {
    if drafts.is_empty() {
        return Ok(Vec::new());
    }

    let models: Vec<property_image::Model> =
        drafts.into_iter().map(NewPropertyImage::into_model).collect();
    property_image::Entity::insert_many(models.iter().cloned().map(property_image::ActiveModel::from))
        .exec_without_returning(db)
        .await?;
    debug!("Inserted {} property images", models.len());

    Ok(models.into_iter().map(PropertyImageDto::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::setup_db;

    #[tokio::test]
    async fn test_insert_and_list() {
        let db = setup_db().await.unwrap();

        let stored = insert_many(
            &db,
            vec![
                NewPropertyImage::enabled("p1", "front.jpg"),
                NewPropertyImage {
                    property_id: "p1".to_string(),
                    file: "old.jpg".to_string(),
                    enabled: false,
                },
            ],
        )
        .await
        .unwrap();
        assert_eq!(stored.len(), 2);

        let listed = list_all(&db).await.unwrap();
        assert_eq!(listed, stored);
        assert_eq!(count(&db).await.unwrap(), 2);
        assert!(listed[0].enabled);
        assert!(!listed[1].enabled);
    }
}
