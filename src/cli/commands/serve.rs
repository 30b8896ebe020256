//! Serve command - starts the REST API

use miette::Result;
use tracing::{error, info};

use super::open_database;
use crate::api::{self, Config};
use crate::cli::DatabaseArgs;
use crate::db::{SeedData, SqliteDatabase, seed_database};

/// Seed empty collections. A failure is logged and startup continues.
pub async fn seed_on_startup(db: &SqliteDatabase) {
    if let Err(e) = seed_database(db, &SeedData::default()).await {
        error!(error = %e, "Database seeding failed; continuing without seed data");
    }
}

/// Run the API server
pub async fn run(args: &DatabaseArgs, config: Config, seed: bool) -> Result<()> {
    let db = open_database(args).await?;

    if seed {
        seed_on_startup(&db).await;
    } else {
        info!("Startup seeding disabled");
    }

    println!();
    println!("Portfolio backend starting...");
    println!("   API:      http://{}/api", config.addr());
    if config.enable_docs {
        println!("   Docs:     http://{}/api/docs", config.addr());
    }
    println!("   Database: {} ({})", args.database_url, args.database_name);
    println!();

    api::run(config, db).await?;

    Ok(())
}
