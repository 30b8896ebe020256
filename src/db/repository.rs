//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing business logic.
//! Every operation is a single independent document-store call; failures
//! are returned as [`DbError`](crate::db::DbError) for reads and writes alike.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{Contact, ContactInfo, Id, Project, Skill, SkillsByCategory},
};

/// Result of an idempotent seed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The collection was empty and this many documents were inserted.
    Seeded(usize),
    /// The collection already held documents; nothing was written.
    Skipped,
}

/// Repository for Project operations.
pub trait ProjectRepository {
    /// Get all projects in insertion order.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Project>>> + Send;

    /// Get projects with `featured == true`.
    fn list_featured(&self) -> impl Future<Output = DbResult<Vec<Project>>> + Send;

    /// Store a new project and return its id.
    fn create(&self, project: &Project) -> impl Future<Output = DbResult<Id>> + Send;

    /// Number of stored projects.
    fn count(&self) -> impl Future<Output = DbResult<u64>> + Send;

    /// Insert all `projects` unless the collection already holds any.
    fn seed(&self, projects: &[Project]) -> impl Future<Output = DbResult<SeedOutcome>> + Send;
}

/// Repository for Skill operations.
pub trait SkillRepository {
    /// Get all skills bucketed into the four categories.
    fn list_grouped(&self) -> impl Future<Output = DbResult<SkillsByCategory>> + Send;

    /// Store a new skill and return its id.
    fn create(&self, skill: &Skill) -> impl Future<Output = DbResult<Id>> + Send;

    /// Number of stored skills.
    fn count(&self) -> impl Future<Output = DbResult<u64>> + Send;

    /// Insert all `skills` unless the collection already holds any.
    fn seed(&self, skills: &[Skill]) -> impl Future<Output = DbResult<SeedOutcome>> + Send;
}

/// Repository for Contact operations.
pub trait ContactRepository {
    /// Store a contact submission and return its id.
    fn create(&self, contact: &Contact) -> impl Future<Output = DbResult<Id>> + Send;

    /// Get all contacts, newest first.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Contact>>> + Send;

    /// Number of stored contacts.
    fn count(&self) -> impl Future<Output = DbResult<u64>> + Send;
}

/// Repository for the singleton ContactInfo document.
pub trait ContactInfoRepository {
    /// Get the contact info, if it has been set.
    fn get(&self) -> impl Future<Output = DbResult<Option<ContactInfo>>> + Send;

    /// Replace the contact info, inserting it when absent. Returns its id.
    fn upsert(&self, info: &ContactInfo) -> impl Future<Output = DbResult<Id>> + Send;

    /// Store `info` only if no contact info exists yet.
    fn seed(&self, info: &ContactInfo) -> impl Future<Output = DbResult<SeedOutcome>> + Send;
}

/// Combined database interface.
///
/// Repositories are cheap owned handles; each accessor call returns a new one.
pub trait Database: Send + Sync {
    type Projects: ProjectRepository + Send + Sync;
    type Skills: SkillRepository + Send + Sync;
    type Contacts: ContactRepository + Send + Sync;
    type Info: ContactInfoRepository + Send + Sync;

    /// Run pending migrations.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Release the underlying connection pool.
    fn close(&self) -> impl Future<Output = ()> + Send;

    /// Get the project repository.
    fn projects(&self) -> Self::Projects;

    /// Get the skill repository.
    fn skills(&self) -> Self::Skills;

    /// Get the contact repository.
    fn contacts(&self) -> Self::Contacts;

    /// Get the contact info repository.
    fn contact_info(&self) -> Self::Info;
}
