use chrono::NaiveDate;
use common::OwnerDto;
use model::entities::owner;
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait};
use tracing::debug;

use crate::{Result, new_identity};

/// An owner that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOwner {
    pub name: String,
    pub address: String,
    pub photo: String,
    pub birthday: NaiveDate,
}

impl NewOwner {
    fn into_model(self) -> owner::Model {
        owner::Model {
            id: new_identity(),
            name: self.name,
            address: self.address,
            photo: self.photo,
            birthday: self.birthday,
        }
    }
}

/// Total number of owners.
pub async fn count<C: ConnectionTrait>(db: &C) -> Result<u64> {
    Ok(owner::Entity::find().count(db).await?)
}

/// Every owner, in storage order.
pub async fn list_all<C: ConnectionTrait>(db: &C) -> Result<Vec<OwnerDto>> {
    let owners = owner::Entity::find().all(db).await?;
    debug!("Loaded {} owners", owners.len());
    Ok(owners.into_iter().map(OwnerDto::from).collect())
}

/// Stores `drafts` in one statement and returns them with their new
/// identities, in the same order.
pub async fn insert_many<C: ConnectionTrait>(db: &C, drafts: Vec<NewOwner>) -> Result<Vec<OwnerDto>> {
    if drafts.is_empty() {
        return Ok(Vec::new());
    }

    let models: Vec<owner::Model> = drafts.into_iter().map(NewOwner::into_model).collect();
    owner::Entity::insert_many(models.iter().cloned().map(owner::ActiveModel::from))
        .exec_without_returning(db)
        .await?;
    debug!("Inserted {} owners", models.len());

    Ok(models.into_iter().map(OwnerDto::from).collect())
}
