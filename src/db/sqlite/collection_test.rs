//! Tests for the document-store primitives.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::collection::{Collection, Document, Filter, Sort};
use crate::db::{Database, SeedOutcome, SqliteDatabase};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Note {
    id: String,
    text: String,
    pinned: bool,
    rank: i64,
    written_at: String,
}

impl Document for Note {
    fn id(&self) -> &str {
        &self.id
    }
}

fn note(id: &str, pinned: bool, rank: i64, written_at: &str) -> Note {
    Note {
        id: id.to_string(),
        text: format!("note {}", id),
        pinned,
        rank,
        written_at: written_at.to_string(),
    }
}

async fn setup() -> (SqliteDatabase, Collection) {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");
    let notes = db.collection("notes");
    (db, notes)
}

#[tokio::test(flavor = "multi_thread")]
async fn find_with_equality_filters() {
    let (_db, notes) = setup().await;
    notes.insert_one(&note("a", true, 1, "2025-01-01T00:00:00Z")).await.unwrap();
    notes.insert_one(&note("b", false, 2, "2025-01-02T00:00:00Z")).await.unwrap();
    notes.insert_one(&note("c", true, 2, "2025-01-03T00:00:00Z")).await.unwrap();

    let pinned: Vec<Note> = notes
        .find(&Filter::Eq("pinned", json!(true)), Sort::Natural)
        .await
        .unwrap();
    assert_eq!(pinned.iter().map(|n| n.id.as_str()).collect::<Vec<_>>(), ["a", "c"]);

    let rank_two: Vec<Note> = notes
        .find(&Filter::Eq("rank", json!(2)), Sort::Natural)
        .await
        .unwrap();
    assert_eq!(rank_two.len(), 2);

    let by_text: Vec<Note> = notes
        .find(&Filter::Eq("text", json!("note b")), Sort::Natural)
        .await
        .unwrap();
    assert_eq!(by_text, vec![note("b", false, 2, "2025-01-02T00:00:00Z")]);
}

#[tokio::test(flavor = "multi_thread")]
async fn find_sorted_descending_by_timestamp() {
    let (_db, notes) = setup().await;
    notes.insert_one(&note("mid", false, 0, "2025-01-02T10:00:00.5Z")).await.unwrap();
    notes.insert_one(&note("new", false, 0, "2025-02-01T00:00:00Z")).await.unwrap();
    notes.insert_one(&note("old", false, 0, "2024-12-31T23:59:59.123456789Z")).await.unwrap();

    let sorted: Vec<Note> = notes.find(&Filter::All, Sort::Desc("written_at")).await.unwrap();
    let ids: Vec<&str> = sorted.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, ["new", "mid", "old"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn collections_and_databases_are_isolated() {
    let (db, notes) = setup().await;
    let other = db.collection("other_notes");
    notes.insert_one(&note("a", false, 0, "2025-01-01T00:00:00Z")).await.unwrap();

    assert_eq!(notes.count().await.unwrap(), 1);
    assert_eq!(other.count().await.unwrap(), 0);
    assert!(other.get::<Note>("a").await.unwrap().is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn get_by_key() {
    let (_db, notes) = setup().await;
    let stored = note("k", true, 7, "2025-01-01T00:00:00Z");
    notes.insert_one(&stored).await.unwrap();

    assert_eq!(notes.get::<Note>("k").await.unwrap(), Some(stored));
    assert_eq!(notes.get::<Note>("missing").await.unwrap(), None);
}

#[tokio::test(flavor = "multi_thread")]
async fn insert_many_if_empty_is_all_or_nothing() {
    let (_db, notes) = setup().await;
    let batch = vec![
        note("a", false, 0, "2025-01-01T00:00:00Z"),
        note("b", false, 0, "2025-01-01T00:00:00Z"),
        note("a", false, 0, "2025-01-01T00:00:00Z"),
    ];

    // Duplicate key aborts the whole batch.
    assert!(notes.insert_many_if_empty(&batch).await.is_err());
    assert_eq!(notes.count().await.unwrap(), 0);

    let outcome = notes.insert_many_if_empty(&batch[..2]).await.unwrap();
    assert_eq!(outcome, SeedOutcome::Seeded(2));
    let outcome = notes.insert_many_if_empty(&batch[..2]).await.unwrap();
    assert_eq!(outcome, SeedOutcome::Skipped);
}

#[tokio::test(flavor = "multi_thread")]
async fn upsert_and_insert_if_absent_share_a_key() {
    let (_db, notes) = setup().await;
    let first = note("first", false, 1, "2025-01-01T00:00:00Z");
    let second = note("second", true, 2, "2025-01-02T00:00:00Z");

    assert!(notes.insert_if_absent("slot", &first).await.unwrap());
    assert!(!notes.insert_if_absent("slot", &second).await.unwrap());
    assert_eq!(notes.get::<Note>("slot").await.unwrap(), Some(first));

    notes.upsert("slot", &second).await.unwrap();
    assert_eq!(notes.get::<Note>("slot").await.unwrap(), Some(second));
    assert_eq!(notes.count().await.unwrap(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn undecodable_document_is_a_serialization_error() {
    let (_db, notes) = setup().await;
    notes.upsert("odd", &json_doc()).await.unwrap();

    let result = notes.get::<Note>("odd").await;
    assert!(matches!(
        result,
        Err(crate::db::DbError::Serialization { .. })
    ));
}

#[derive(Serialize, Deserialize)]
struct Loose {
    id: String,
}

impl Document for Loose {
    fn id(&self) -> &str {
        &self.id
    }
}

fn json_doc() -> Loose {
    Loose {
        id: "odd".to_string(),
    }
}
