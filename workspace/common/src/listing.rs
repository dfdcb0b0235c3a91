use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A property listing as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDto {
    pub id: String,
    /// Identity of the owner. Not checked against the owners collection.
    pub id_owner: String,
    pub name: String,
    pub address: String,
    #[schema(value_type = String, example = "450000000")]
    pub price: Decimal,
    /// Agency-internal reference code, e.g. `PROP001`
    pub code_internal: String,
    /// Construction year
    pub year: i32,
    /// File name of the primary image
    pub image: String,
}

/// An owner of one or more properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDto {
    pub id: String,
    pub name: String,
    pub address: String,
    /// File name of the owner's photo
    pub photo: String,
    pub birthday: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyImageDto {
    pub id: String,
    pub id_property: String,
    pub file: String,
    pub enabled: bool,
}

/// A recorded sale or transfer of a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyTraceDto {
    pub id: String,
    pub id_property: String,
    pub date_sale: DateTime<Utc>,
    /// Transaction label, e.g. "Venta Inicial"
    pub name: String,
    #[schema(value_type = String)]
    pub value: Decimal,
    #[schema(value_type = String)]
    pub tax: Decimal,
}
