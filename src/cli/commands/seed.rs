//! Seed command - fill empty collections and exit

use miette::Result;

use super::open_database;
use crate::cli::DatabaseArgs;
use crate::db::{Database, SeedData, SeedOutcome, SeedReport, seed_database};

fn describe(outcome: SeedOutcome) -> String {
    match outcome {
        SeedOutcome::Seeded(n) => format!("seeded {}", n),
        SeedOutcome::Skipped => "already present, skipped".to_string(),
    }
}

/// Seed the configured database with the default portfolio content.
pub async fn run(args: &DatabaseArgs) -> Result<SeedReport> {
    let db = open_database(args).await?;
    let result = seed_database(&db, &SeedData::default()).await;
    db.close().await;
    let report = result?;

    println!("Projects:     {}", describe(report.projects));
    println!("Skills:       {}", describe(report.skills));
    println!("Contact info: {}", describe(report.contact_info));

    Ok(report)
}
