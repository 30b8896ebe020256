//! Database utility functions.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Generate a UUID v4 string for a new document.
pub fn generate_entity_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current UTC time, used for `created_at`/`updated_at` stamps.
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}
