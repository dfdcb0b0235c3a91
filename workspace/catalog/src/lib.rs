//! Domain layer of the real-estate catalog.
//!
//! One accessor module per collection ([`owners`], [`properties`],
//! [`images`], [`traces`]), the property [`filter`] composer, the fixture
//! [`seeder`] and the aggregate [`report`]. Every accessor is generic over
//! [`sea_orm::ConnectionTrait`] so it runs equally on a pooled connection or
//! inside a transaction.

pub mod error;
pub mod filter;
pub mod images;
pub mod owners;
pub mod properties;
pub mod report;
pub mod seeder;
pub mod traces;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{CatalogError, Result};
pub use seeder::Seeder;

/// Generates the opaque identity given to a record at insert time.
pub(crate) fn new_identity() -> String {
    uuid::Uuid::new_v4().to_string()
}
