//! SQLite ContactInfoRepository implementation.
//!
//! The single contact info document always lives under [`SINGLETON_KEY`],
//! so an upsert can never create a second one.

use tracing::{error, info};

use super::collection::{Collection, Document};
use crate::db::{ContactInfo, ContactInfoRepository, DbResult, Id, SeedOutcome};

/// Storage key of the contact info document.
pub const SINGLETON_KEY: &str = "contact_info";

impl Document for ContactInfo {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Document-backed contact info repository.
pub struct SqliteContactInfoRepository {
    pub(crate) collection: Collection,
}

impl ContactInfoRepository for SqliteContactInfoRepository {
    async fn get(&self) -> DbResult<Option<ContactInfo>> {
        self.collection
            .get(SINGLETON_KEY)
            .await
            .inspect_err(|e| error!(error = %e, "Error getting contact info"))
    }

    async fn upsert(&self, info: &ContactInfo) -> DbResult<Id> {
        self.collection
            .upsert(SINGLETON_KEY, info)
            .await
            .inspect_err(|e| error!(error = %e, "Error upserting contact info"))?;
        Ok(info.id.clone())
    }

    async fn seed(&self, info: &ContactInfo) -> DbResult<SeedOutcome> {
        let written = self
            .collection
            .insert_if_absent(SINGLETON_KEY, info)
            .await
            .inspect_err(|e| error!(error = %e, "Error seeding contact info"))?;
        if written {
            info!("Seeded contact info");
            Ok(SeedOutcome::Seeded(1))
        } else {
            info!("Contact info already exists, skipping seed");
            Ok(SeedOutcome::Skipped)
        }
    }
}
