use crate::cli::DatabaseArgs;
use crate::cli::commands::seed;
use crate::db::{
    ContactInfoRepository, Database, ProjectRepository, SeedOutcome, SkillRepository,
    SqliteDatabase,
};

fn file_args(dir: &tempfile::TempDir) -> DatabaseArgs {
    DatabaseArgs {
        database_url: format!("sqlite://{}", dir.path().join("folio.db").display()),
        database_name: "portfolio".to_string(),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn seed_fills_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let args = file_args(&dir);

    let report = seed::run(&args).await.unwrap();
    assert_eq!(report.projects, SeedOutcome::Seeded(6));
    assert_eq!(report.skills, SeedOutcome::Seeded(24));
    assert_eq!(report.contact_info, SeedOutcome::Seeded(1));

    let db = SqliteDatabase::connect(&args.database_url, &args.database_name)
        .await
        .unwrap();
    assert_eq!(db.projects().count().await.unwrap(), 6);
    assert_eq!(db.skills().count().await.unwrap(), 24);
    assert!(db.contact_info().get().await.unwrap().is_some());
    db.close().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn seed_twice_skips_second_time() {
    let dir = tempfile::tempdir().unwrap();
    let args = file_args(&dir);

    seed::run(&args).await.unwrap();
    let report = seed::run(&args).await.unwrap();

    assert_eq!(report.projects, SeedOutcome::Skipped);
    assert_eq!(report.skills, SeedOutcome::Skipped);
    assert_eq!(report.contact_info, SeedOutcome::Skipped);
}

#[tokio::test(flavor = "multi_thread")]
async fn seed_rejects_empty_database_name() {
    let dir = tempfile::tempdir().unwrap();
    let mut args = file_args(&dir);
    args.database_name = String::new();

    assert!(seed::run(&args).await.is_err());
}
