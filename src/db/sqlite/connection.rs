//! SQLite connection pool and migration management.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::debug;

use super::collection::Collection;
use super::{
    SqliteContactInfoRepository, SqliteContactRepository, SqliteProjectRepository,
    SqliteSkillRepository,
};
use crate::db::{Database, DbError, DbResult};

// Embed migrations from data/sql/sqlite/ at compile time
static MIGRATOR: Migrator = sqlx::migrate!("data/sql/sqlite");

pub const PROJECTS: &str = "projects";
pub const SKILLS: &str = "skills";
pub const CONTACTS: &str = "contacts";
pub const CONTACT_INFO: &str = "contact_info";

/// Database name used by [`SqliteDatabase::in_memory`].
pub const DEFAULT_DB_NAME: &str = "portfolio";

/// SQLite-backed document store.
///
/// Owns the connection pool; repositories get cheap clones of it scoped to
/// one collection of this database name.
pub struct SqliteDatabase {
    pool: SqlitePool,
    db_name: Arc<str>,
}

impl SqliteDatabase {
    /// Connect to the store at `url` and scope every document to `db_name`.
    ///
    /// File databases are created when missing.
    pub async fn connect(url: &str, db_name: &str) -> DbResult<Self> {
        if db_name.trim().is_empty() {
            return Err(DbError::Connection {
                message: "database name must not be empty".to_string(),
            });
        }

        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| DbError::Connection {
                message: format!("invalid database url '{}': {}", url, e),
            })?
            .create_if_missing(true);

        // Every connection to `:memory:` opens its own empty database, so an
        // in-memory store must live on exactly one connection.
        let in_memory = url.contains(":memory:") || url.contains("mode=memory");
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        debug!(url, db_name, "Connected to document store");

        Ok(Self {
            pool,
            db_name: Arc::from(db_name),
        })
    }

    /// Create an in-memory database (useful for testing).
    pub async fn in_memory() -> DbResult<Self> {
        Self::connect("sqlite::memory:", DEFAULT_DB_NAME).await
    }

    /// Database name every document is scoped to.
    pub fn db_name(&self) -> &str {
        &self.db_name
    }

    pub(crate) fn collection(&self, name: &'static str) -> Collection {
        Collection::new(self.pool.clone(), Arc::clone(&self.db_name), name)
    }
}

impl Database for SqliteDatabase {
    type Projects = SqliteProjectRepository;
    type Skills = SqliteSkillRepository;
    type Contacts = SqliteContactRepository;
    type Info = SqliteContactInfoRepository;

    async fn migrate(&self) -> DbResult<()> {
        MIGRATOR
            .run(&self.pool)
            .await
            .map_err(|e| DbError::Migration {
                message: e.to_string(),
            })
    }

    async fn close(&self) {
        self.pool.close().await;
    }

    fn projects(&self) -> Self::Projects {
        SqliteProjectRepository {
            collection: self.collection(PROJECTS),
        }
    }

    fn skills(&self) -> Self::Skills {
        SqliteSkillRepository {
            collection: self.collection(SKILLS),
        }
    }

    fn contacts(&self) -> Self::Contacts {
        SqliteContactRepository {
            collection: self.collection(CONTACTS),
        }
    }

    fn contact_info(&self) -> Self::Info {
        SqliteContactInfoRepository {
            collection: self.collection(CONTACT_INFO),
        }
    }
}
