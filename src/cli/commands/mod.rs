pub mod seed;
pub mod serve;

use miette::Result;
use tracing::info;

use crate::cli::DatabaseArgs;
use crate::db::{Database, SqliteDatabase};

/// Connect to the configured store and bring its schema up to date.
pub async fn open_database(args: &DatabaseArgs) -> Result<SqliteDatabase> {
    let db = SqliteDatabase::connect(&args.database_url, &args.database_name).await?;
    db.migrate().await?;
    info!(
        url = %args.database_url,
        name = %args.database_name,
        "Database ready"
    );
    Ok(db)
}

#[cfg(test)]
#[path = "seed_test.rs"]
mod seed_test;
