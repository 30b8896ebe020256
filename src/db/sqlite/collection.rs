//! Document-store primitives over the SQLite `document` table.
//!
//! Every row is one JSON document addressed by `(db_name, collection, id)`.
//! A [`Collection`] scopes all statements to one database name and one
//! collection, so repositories never write SQL against other collections.

use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use sqlx::{Row, Sqlite, SqlitePool, query::Query, sqlite::SqliteArguments};

use crate::db::{DbResult, SeedOutcome};

/// A model that can be stored as a document.
pub trait Document: Serialize + DeserializeOwned + Send + Sync {
    /// Key the document is stored under.
    fn id(&self) -> &str;
}

/// Filter applied by [`Collection::find`].
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Match every document.
    All,
    /// Match documents whose top-level `field` equals the value.
    Eq(&'static str, Value),
}

/// Ordering applied by [`Collection::find`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sort {
    /// Insertion order.
    Natural,
    /// Descending by a top-level timestamp field, newest insert first on ties.
    Desc(&'static str),
}

impl Sort {
    fn order_clause(&self) -> String {
        match self {
            Sort::Natural => " ORDER BY rowid ASC".to_string(),
            Sort::Desc(field) => format!(
                " ORDER BY julianday(json_extract(body, '$.{}')) DESC, rowid DESC",
                field
            ),
        }
    }
}

type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// Bind a JSON scalar the way `json_extract` reports it back to SQL.
fn bind_json<'q>(query: SqliteQuery<'q>, value: &Value) -> SqliteQuery<'q> {
    match value {
        Value::Bool(b) => query.bind(i64::from(*b)),
        Value::Number(n) => match n.as_i64() {
            Some(i) => query.bind(i),
            None => query.bind(n.as_f64().unwrap_or_default()),
        },
        Value::String(s) => query.bind(s.clone()),
        other => query.bind(other.to_string()),
    }
}

/// Handle on one named collection within one database.
#[derive(Debug, Clone)]
pub struct Collection {
    pool: SqlitePool,
    db_name: Arc<str>,
    name: &'static str,
}

impl Collection {
    pub(crate) fn new(pool: SqlitePool, db_name: Arc<str>, name: &'static str) -> Self {
        Self {
            pool,
            db_name,
            name,
        }
    }

    /// Fetch all documents matching `filter`, in `sort` order.
    pub async fn find<T: Document>(&self, filter: &Filter, sort: Sort) -> DbResult<Vec<T>> {
        let mut sql =
            String::from("SELECT body FROM document WHERE db_name = ? AND collection = ?");
        if matches!(filter, Filter::Eq(..)) {
            sql.push_str(" AND json_extract(body, ?) = ?");
        }
        sql.push_str(&sort.order_clause());

        let mut query = sqlx::query(&sql).bind(&*self.db_name).bind(self.name);
        if let Filter::Eq(field, value) = filter {
            query = bind_json(query.bind(format!("$.{}", field)), value);
        }

        let rows = query.fetch_all(&self.pool).await?;
        rows.iter()
            .map(|row| -> DbResult<T> {
                let body: String = row.try_get("body")?;
                Ok(serde_json::from_str(&body)?)
            })
            .collect()
    }

    /// Fetch the document stored under `id`.
    pub async fn get<T: Document>(&self, id: &str) -> DbResult<Option<T>> {
        let body: Option<String> = sqlx::query_scalar(
            "SELECT body FROM document WHERE db_name = ? AND collection = ? AND id = ?",
        )
        .bind(&*self.db_name)
        .bind(self.name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        body.map(|b| serde_json::from_str::<T>(&b))
            .transpose()
            .map_err(Into::into)
    }

    /// Number of documents in the collection.
    pub async fn count(&self) -> DbResult<u64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM document WHERE db_name = ? AND collection = ?",
        )
        .bind(&*self.db_name)
        .bind(self.name)
        .fetch_one(&self.pool)
        .await?;
        Ok(u64::try_from(count).unwrap_or_default())
    }

    /// Insert a document under its own id.
    pub async fn insert_one<T: Document>(&self, doc: &T) -> DbResult<()> {
        let body = serde_json::to_string(doc)?;
        sqlx::query("INSERT INTO document (db_name, collection, id, body) VALUES (?, ?, ?, ?)")
            .bind(&*self.db_name)
            .bind(self.name)
            .bind(doc.id())
            .bind(body)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Insert every document in one transaction, but only when the
    /// collection is empty.
    pub async fn insert_many_if_empty<T: Document>(&self, docs: &[T]) -> DbResult<SeedOutcome> {
        let mut tx = self.pool.begin().await?;

        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM document WHERE db_name = ? AND collection = ?",
        )
        .bind(&*self.db_name)
        .bind(self.name)
        .fetch_one(&mut *tx)
        .await?;

        if count > 0 {
            tx.rollback().await?;
            return Ok(SeedOutcome::Skipped);
        }

        for doc in docs {
            let body = serde_json::to_string(doc)?;
            sqlx::query(
                "INSERT INTO document (db_name, collection, id, body) VALUES (?, ?, ?, ?)",
            )
            .bind(&*self.db_name)
            .bind(self.name)
            .bind(doc.id())
            .bind(body)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(SeedOutcome::Seeded(docs.len()))
    }

    /// Store `doc` under `key`, replacing whatever is there.
    pub async fn upsert<T: Document>(&self, key: &str, doc: &T) -> DbResult<()> {
        let body = serde_json::to_string(doc)?;
        sqlx::query(
            "INSERT INTO document (db_name, collection, id, body) VALUES (?, ?, ?, ?) \
             ON CONFLICT (db_name, collection, id) DO UPDATE SET body = excluded.body",
        )
        .bind(&*self.db_name)
        .bind(self.name)
        .bind(key)
        .bind(body)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Store `doc` under `key` unless something is already there.
    /// Returns whether a row was written.
    pub async fn insert_if_absent<T: Document>(&self, key: &str, doc: &T) -> DbResult<bool> {
        let body = serde_json::to_string(doc)?;
        let result = sqlx::query(
            "INSERT INTO document (db_name, collection, id, body) VALUES (?, ?, ?, ?) \
             ON CONFLICT (db_name, collection, id) DO NOTHING",
        )
        .bind(&*self.db_name)
        .bind(self.name)
        .bind(key)
        .bind(body)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
