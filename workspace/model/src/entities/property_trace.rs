use common::PropertyTraceDto;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// A sale or transfer recorded against a property.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "property_traces")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub property_id: String,
    pub date_sale: DateTimeUtc,
    /// Transaction label, e.g. "Compra" or "Transferencia".
    pub name: String,
    #[sea_orm(column_type = "Decimal(Some((16, 2)))")]
    pub value: Decimal,
    #[sea_orm(column_type = "Decimal(Some((16, 2)))")]
    pub tax: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::property::Entity",
        from = "Column::PropertyId",
        to = "super::property::Column::Id"
    )]
    Property,
}

impl Related<super::property::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Property.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for PropertyTraceDto {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            id_property: model.property_id,
            date_sale: model.date_sale,
            name: model.name,
            value: model.value,
            tax: model.tax,
        }
    }
}
