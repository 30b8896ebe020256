//! SQLite ProjectRepository implementation.

use serde_json::Value;
use tracing::{error, info};

use super::collection::{Collection, Document, Filter, Sort};
use crate::db::{DbResult, Id, Project, ProjectRepository, SeedOutcome};

impl Document for Project {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Document-backed project repository.
pub struct SqliteProjectRepository {
    pub(crate) collection: Collection,
}

impl ProjectRepository for SqliteProjectRepository {
    async fn list(&self) -> DbResult<Vec<Project>> {
        self.collection
            .find(&Filter::All, Sort::Natural)
            .await
            .inspect_err(|e| error!(error = %e, "Error getting projects"))
    }

    async fn list_featured(&self) -> DbResult<Vec<Project>> {
        self.collection
            .find(&Filter::Eq("featured", Value::Bool(true)), Sort::Natural)
            .await
            .inspect_err(|e| error!(error = %e, "Error getting featured projects"))
    }

    async fn create(&self, project: &Project) -> DbResult<Id> {
        self.collection
            .insert_one(project)
            .await
            .inspect_err(|e| error!(error = %e, "Error creating project"))?;
        Ok(project.id.clone())
    }

    async fn count(&self) -> DbResult<u64> {
        self.collection.count().await
    }

    async fn seed(&self, projects: &[Project]) -> DbResult<SeedOutcome> {
        let outcome = self
            .collection
            .insert_many_if_empty(projects)
            .await
            .inspect_err(|e| error!(error = %e, "Error seeding projects"))?;
        match outcome {
            SeedOutcome::Seeded(n) => info!(count = n, "Seeded projects"),
            SeedOutcome::Skipped => info!("Projects already exist, skipping seed"),
        }
        Ok(outcome)
    }
}
