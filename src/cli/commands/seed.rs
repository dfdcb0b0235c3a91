use anyhow::Result;
use catalog::Seeder;
use tracing::{info, trace};

use super::run_migrations;
use crate::config::connect;

pub async fn seed_database(database_url: &str) -> Result<()> {
    trace!("Entering seed_database function");
    let db = connect(database_url, 1).await?;
    run_migrations(&db).await?;

    let outcome = Seeder::new().seed(&db).await?;
    if outcome.seeded {
        info!(
            "Seeded {} owners, {} properties, {} images and {} traces",
            outcome.owners, outcome.properties, outcome.images, outcome.traces
        );
    } else {
        info!("Database already contains data, nothing seeded");
    }
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    Ok(())
}
