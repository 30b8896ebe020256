//! Data model and storage access layer.
//!
//! This module provides trait-based abstractions for data access,
//! allowing different storage backends to be swapped without changing
//! the API layer.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: Domain entities (Project, Skill, Contact, ContactInfo)
//! - `validation`: Field constraints checked when entities are built
//! - `repository`: Trait definitions for data access
//! - `seed`: Default portfolio content and the startup seeding pass
//! - `sqlite`: Document store on SQLite

mod error;
mod models;
mod repository;
mod seed;
pub mod sqlite;
pub mod utils;
mod validation;


pub use error::{DbError, DbResult};
pub use models::*;
pub use repository::*;
pub use seed::{SeedData, SeedReport, seed_database};
pub use sqlite::SqliteDatabase;
pub use validation::{FieldError, ValidationError, is_valid_email};
