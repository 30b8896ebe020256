//! SQLite ContactRepository implementation.

use tracing::error;

use super::collection::{Collection, Document, Filter, Sort};
use crate::db::{Contact, ContactRepository, DbResult, Id};

impl Document for Contact {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Document-backed contact repository.
pub struct SqliteContactRepository {
    pub(crate) collection: Collection,
}

impl ContactRepository for SqliteContactRepository {
    async fn create(&self, contact: &Contact) -> DbResult<Id> {
        self.collection
            .insert_one(contact)
            .await
            .inspect_err(|e| error!(error = %e, "Error creating contact"))?;
        Ok(contact.id.clone())
    }

    async fn list(&self) -> DbResult<Vec<Contact>> {
        let mut contacts: Vec<Contact> = self
            .collection
            .find(&Filter::All, Sort::Desc("created_at"))
            .await
            .inspect_err(|e| error!(error = %e, "Error getting contacts"))?;
        // SQLite compares timestamps at millisecond resolution; the stable
        // sort restores full precision and keeps latest-insert on exact ties.
        contacts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(contacts)
    }

    async fn count(&self) -> DbResult<u64> {
        self.collection.count().await
    }
}
