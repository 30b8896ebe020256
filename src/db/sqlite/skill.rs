//! SQLite SkillRepository implementation.

use tracing::{error, info};

use super::collection::{Collection, Document, Filter, Sort};
use crate::db::{DbResult, Id, SeedOutcome, Skill, SkillRepository, SkillsByCategory};

impl Document for Skill {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Document-backed skill repository.
pub struct SqliteSkillRepository {
    pub(crate) collection: Collection,
}

impl SkillRepository for SqliteSkillRepository {
    async fn list_grouped(&self) -> DbResult<SkillsByCategory> {
        let skills: Vec<Skill> = self
            .collection
            .find(&Filter::All, Sort::Natural)
            .await
            .inspect_err(|e| error!(error = %e, "Error getting skills"))?;
        Ok(skills.into_iter().collect())
    }

    async fn create(&self, skill: &Skill) -> DbResult<Id> {
        self.collection
            .insert_one(skill)
            .await
            .inspect_err(|e| error!(error = %e, "Error creating skill"))?;
        Ok(skill.id.clone())
    }

    async fn count(&self) -> DbResult<u64> {
        self.collection.count().await
    }

    async fn seed(&self, skills: &[Skill]) -> DbResult<SeedOutcome> {
        let outcome = self
            .collection
            .insert_many_if_empty(skills)
            .await
            .inspect_err(|e| error!(error = %e, "Error seeding skills"))?;
        match outcome {
            SeedOutcome::Seeded(n) => info!(count = n, "Seeded skills"),
            SeedOutcome::Skipped => info!("Skills already exist, skipping seed"),
        }
        Ok(outcome)
    }
}
