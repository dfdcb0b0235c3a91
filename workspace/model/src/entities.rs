//! SeaORM entities for the real-estate catalog.
//!
//! Each entity maps one collection. Relations are declared so that related
//! rows can be joined, but the schema carries no foreign-key constraints.

pub mod owner;
pub mod property;
pub mod property_image;
pub mod property_trace;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::owner::Entity as Owner;
    pub use super::property::Entity as Property;
    pub use super::property_image::Entity as PropertyImage;
    pub use super::property_trace::Entity as PropertyTrace;
}

#[cfg(test)]
mod test {
    use chrono::{NaiveDate, TimeZone, Utc};
    use common::{OwnerDto, PropertyDto};
    use migration::{Migrator, MigratorTrait};
    use rust_decimal::Decimal;
    use sea_orm::{
        ActiveModelTrait, ColumnTrait, Database, DatabaseConnection, DbErr, EntityTrait,
        ModelTrait, QueryFilter, Set,
    };

    use super::*;
    use prelude::*;

    async fn setup_db() -> Result<DatabaseConnection, DbErr> {
        let db = Database::connect("sqlite::memory:").await?;
        Migrator::up(&db, None).await?;
        Ok(db)
    }

    #[tokio::test]
    async fn test_entity_integration() -> Result<(), DbErr> {
        let db = setup_db().await?;

        let juan = owner::ActiveModel {
            id: Set("owner-1".to_string()),
            name: Set("Juan Pérez".to_string()),
            address: Set("Calle 10 #15-20, Bogotá".to_string()),
            photo: Set("juan_perez.jpg".to_string()),
            birthday: Set(NaiveDate::from_ymd_opt(1980, 5, 15).unwrap()),
        }
        .insert(&db)
        .await?;

        let casa = property::ActiveModel {
            id: Set("property-1".to_string()),
            owner_id: Set(juan.id.clone()),
            name: Set("Casa en Cedritos".to_string()),
            address: Set("Calle 147 #45-67, Bogotá".to_string()),
            price: Set(Decimal::new(280_000_000, 0)),
            code_internal: Set("PROP003".to_string()),
            year: Set(2021),
            image: Set("casa_cedritos.jpg".to_string()),
        }
        .insert(&db)
        .await?;

        property_image::ActiveModel {
            id: Set("image-1".to_string()),
            property_id: Set(casa.id.clone()),
            file: Set("casa_cedritos_1.jpg".to_string()),
            enabled: Set(true),
        }
        .insert(&db)
        .await?;

        property_trace::ActiveModel {
            id: Set("trace-1".to_string()),
            property_id: Set(casa.id.clone()),
            date_sale: Set(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()),
            name: Set("Transferencia".to_string()),
            value: Set(Decimal::new(280_000_000, 0)),
            tax: Set(Decimal::new(14_000_000, 0)),
        }
        .insert(&db)
        .await?;

        // Read back and verify
        let stored = Property::find_by_id("property-1").one(&db).await?.unwrap();
        assert_eq!(stored.price, Decimal::new(280_000_000, 0));
        assert_eq!(stored.owner_id, "owner-1");

        let owner_of = stored.find_related(Owner).one(&db).await?.unwrap();
        assert_eq!(owner_of.name, "Juan Pérez");

        let images = stored.find_related(PropertyImage).all(&db).await?;
        assert_eq!(images.len(), 1);
        assert!(images[0].enabled);

        let traces = PropertyTrace::find()
            .filter(property_trace::Column::PropertyId.eq("property-1"))
            .all(&db)
            .await?;
        assert_eq!(traces.len(), 1);
        assert_eq!(traces[0].tax, Decimal::new(14_000_000, 0));

        Ok(())
    }

    #[tokio::test]
    async fn test_foreign_ids_are_not_enforced() -> Result<(), DbErr> {
        let db = setup_db().await?;

        // No owner with this identity exists; the insert still succeeds.
        let orphan = property::ActiveModel {
            id: Set("orphan".to_string()),
            owner_id: Set("missing-owner".to_string()),
            name: Set("Lote".to_string()),
            address: Set("Sin dirección".to_string()),
            price: Set(Decimal::ONE),
            code_internal: Set("PROP999".to_string()),
            year: Set(1999),
            image: Set(String::new()),
        }
        .insert(&db)
        .await?;

        assert!(orphan.find_related(Owner).one(&db).await?.is_none());
        Ok(())
    }

    #[test]
    fn test_models_map_to_transfer_objects() {
        let model = property::Model {
            id: "p".to_string(),
            owner_id: "o".to_string(),
            name: "Penthouse El Poblado".to_string(),
            address: "Carrera 43A #15-25, Medellín".to_string(),
            price: Decimal::new(850_000_000, 0),
            code_internal: "PROP004".to_string(),
            year: 2022,
            image: "penthouse_poblado.jpg".to_string(),
        };
        let dto = PropertyDto::from(model);
        assert_eq!(dto.id_owner, "o");
        assert_eq!(dto.code_internal, "PROP004");

        let owner = owner::Model {
            id: "o".to_string(),
            name: "Carlos López".to_string(),
            address: "Avenida 68 #45-12, Cali".to_string(),
            photo: "carlos_lopez.jpg".to_string(),
            birthday: NaiveDate::from_ymd_opt(1985, 12, 3).unwrap(),
        };
        let dto = OwnerDto::from(owner);
        assert_eq!(dto.photo, "carlos_lopez.jpg");
    }
}
