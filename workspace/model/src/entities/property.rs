use common::PropertyDto;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// A property listed for sale.
///
/// `owner_id` is a plain identifier: nothing checks that the owner exists,
/// and removing an owner would not touch its properties.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "properties")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub address: String,
    #[sea_orm(column_type = "Decimal(Some((16, 2)))")]
    pub price: Decimal,
    /// Agency-internal reference code.
    pub code_internal: String,
    /// Construction year.
    pub year: i32,
    /// File name of the primary image.
    pub image: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::owner::Entity",
        from = "Column::OwnerId",
        to = "super::owner::Column::Id"
    )]
    Owner,
    #[sea_orm(has_many = "super::property_image::Entity")]
    PropertyImage,
    #[sea_orm(has_many = "super::property_trace::Entity")]
    PropertyTrace,
}

impl Related<super::owner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::property_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PropertyImage.def()
    }
}

impl Related<super::property_trace::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PropertyTrace.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for PropertyDto {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            id_owner: model.owner_id,
            name: model.name,
            address: model.address,
            price: model.price,
            code_internal: model.code_internal,
            year: model.year,
            image: model.image,
        }
    }
}
