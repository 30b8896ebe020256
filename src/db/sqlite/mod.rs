//! SQLite implementation of the database traits.
//!
//! The store is document-shaped: one table of JSON documents, partitioned
//! by database name and collection. See [`collection`] for the primitives
//! the repositories are built on.

pub mod collection;
mod connection;
mod contact;
mod contact_info;
mod project;
mod skill;

#[cfg(test)]
mod collection_test;

pub use connection::{
    CONTACT_INFO, CONTACTS, DEFAULT_DB_NAME, PROJECTS, SKILLS, SqliteDatabase,
};
pub use contact::SqliteContactRepository;
pub use contact_info::{SINGLETON_KEY, SqliteContactInfoRepository};
pub use project::SqliteProjectRepository;
pub use skill::SqliteSkillRepository;
