//! Loads the demonstration fixture into an empty store.
//!
//! The fixture is three owners with five properties between them, eight
//! images and four sale records. Seeding runs in one transaction and is a
//! no-op once any owner exists.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use common::SeedOutcome;
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, TransactionTrait};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use crate::images::{self, NewPropertyImage};
use crate::owners::{self, NewOwner};
use crate::properties::{self, NewProperty};
use crate::traces::{self, NewPropertyTrace};
use crate::{CatalogError, Result};

/// (name, address, photo, (year, month, day))
const OWNERS: [(&str, &str, &str, (i32, u32, u32)); 3] = [
    ("Juan Pérez", "Calle 10 #15-20, Bogotá", "juan_perez.jpg", (1980, 5, 15)),
    ("María García", "Carrera 25 #30-45, Medellín", "maria_garcia.jpg", (1975, 8, 22)),
    ("Carlos López", "Avenida 68 #45-12, Cali", "carlos_lopez.jpg", (1985, 12, 3)),
];

/// (owner index, name, address, price, code, year, image)
const PROPERTIES: [(usize, &str, &str, i64, &str, i32, &str); 5] = [
    (0, "Casa Campestre en La Sabana", "Vereda La Esperanza, Chía", 450_000_000, "PROP001", 2020, "casa_campestre.jpg"),
    (1, "Apartamento Zona Rosa", "Carrera 13 #85-32, Bogotá", 320_000_000, "PROP002", 2019, "apto_zona_rosa.jpg"),
    (0, "Casa en Cedritos", "Calle 147 #45-67, Bogotá", 280_000_000, "PROP003", 2021, "casa_cedritos.jpg"),
    (2, "Penthouse El Poblado", "Carrera 43A #15-25, Medellín", 850_000_000, "PROP004", 2022, "penthouse_poblado.jpg"),
    (1, "Apartaestudio Chapinero", "Carrera 15 #63-45, Bogotá", 180_000_000, "PROP005", 2018, "apartaestudio_chapinero.jpg"),
];

/// (property index, file)
const IMAGES: [(usize, &str); 8] = [
    (0, "casa_campestre_1.jpg"),
    (0, "casa_campestre_2.jpg"),
    (1, "apto_zona_rosa_1.jpg"),
    (1, "apto_zona_rosa_2.jpg"),
    (2, "casa_cedritos_1.jpg"),
    (3, "penthouse_1.jpg"),
    (3, "penthouse_2.jpg"),
    (4, "apartaestudio_1.jpg"),
];

/// (property index, days before now, name, value, tax)
const TRACES: [(usize, i64, &str, i64, i64); 4] = [
    (0, 30, "Venta Inicial", 450_000_000, 22_500_000),
    (1, 45, "Compra", 320_000_000, 16_000_000),
    (2, 60, "Transferencia", 280_000_000, 14_000_000),
    (3, 15, "Venta Premium", 850_000_000, 42_500_000),
];

#[derive(Debug, Default)]
pub struct Seeder {
    now: Option<DateTime<Utc>>,
    lock: Mutex<()>,
}

impl Seeder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeder whose sale dates are computed from a fixed instant.
    pub fn with_now(now: DateTime<Utc>) -> Self {
        Self {
            now: Some(now),
            lock: Mutex::new(()),
        }
    }

    /// Inserts the fixture unless the store already holds owners.
    ///
    /// Concurrent calls on the same seeder run one after the other, so only
    /// the first of them writes.
    #[instrument(skip(self, db))]
    pub async fn seed(&self, db: &DatabaseConnection) -> Result<SeedOutcome> {
        let _guard = self.lock.lock().await;

        let existing = owners::count(db).await?;
        if existing > 0 {
            info!("Store already holds {} owners, skipping seed", existing);
            return Ok(SeedOutcome::default());
        }

        let now = self.now.unwrap_or_else(Utc::now);
        let txn = db.begin().await?;

        let owners = owners::insert_many(&txn, owner_drafts()?).await?;
        debug!("Seeded {} owners", owners.len());
        let owner_ids: Vec<String> = owners.into_iter().map(|o| o.id).collect();

        let properties = properties::insert_many(&txn, property_drafts(&owner_ids)?).await?;
        debug!("Seeded {} properties", properties.len());
        let property_ids: Vec<String> = properties.into_iter().map(|p| p.id).collect();

        let images = images::insert_many(&txn, image_drafts(&property_ids)?).await?;
        let traces = traces::insert_many(&txn, trace_drafts(&property_ids, now)?).await?;

        txn.commit().await?;

        let outcome = SeedOutcome {
            seeded: true,
            owners: owner_ids.len(),
            properties: property_ids.len(),
            images: images.len(),
            traces: traces.len(),
        };
        info!(?outcome, "Seed completed");
        Ok(outcome)
    }
}

fn identity(ids: &[String], index: usize, collection: &str) -> Result<String> {
    ids.get(index)
        .cloned()
        .ok_or_else(|| CatalogError::Fixture(format!("no {collection} at index {index}")))
}

fn owner_drafts() -> Result<Vec<NewOwner>> {
    OWNERS
        .iter()
        .map(|&(name, address, photo, (year, month, day))| {
            let birthday = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
                CatalogError::Fixture(format!("invalid birthday for {name}"))
            })?;
            Ok(NewOwner {
                name: name.to_string(),
                address: address.to_string(),
                photo: photo.to_string(),
                birthday,
            })
        })
        .collect()
}

fn property_drafts(owner_ids: &[String]) -> Result<Vec<NewProperty>> {
    PROPERTIES
        .iter()
        .map(|&(owner, name, address, price, code, year, image)| {
            Ok(NewProperty {
                owner_id: identity(owner_ids, owner, "owner")?,
                name: name.to_string(),
                address: address.to_string(),
                price: Decimal::new(price, 0),
                code_internal: code.to_string(),
                year,
                image: image.to_string(),
            })
        })
        .collect()
}

fn image_drafts(property_ids: &[String]) -> Result<Vec<NewPropertyImage>> {
    IMAGES
        .iter()
        .map(|&(property, file)| {
            Ok(NewPropertyImage::enabled(
                identity(property_ids, property, "property")?,
                file,
            ))
        })
        .collect()
}

fn trace_drafts(property_ids: &[String], now: DateTime<Utc>) -> Result<Vec<NewPropertyTrace>> {
    TRACES
        .iter()
        .map(|&(property, days_ago, name, value, tax)| {
            Ok(NewPropertyTrace {
                property_id: identity(property_ids, property, "property")?,
                date_sale: now - Duration::days(days_ago),
                name: name.to_string(),
                value: Decimal::new(value, 0),
                tax: Decimal::new(tax, 0),
            })
        })
        .collect()
}
