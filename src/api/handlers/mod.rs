//! API request handlers.

mod contact_info;
mod contacts;
mod projects;
mod skills;
mod system;

#[cfg(test)]
mod projects_test;
#[cfg(test)]
mod system_test;

use axum::{Json, http::StatusCode};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::db::DbError;

pub use contact_info::*;
pub use contacts::*;
pub use projects::*;
pub use skills::*;
pub use system::*;

/// Error response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    #[schema(example = "Contact information not found")]
    pub detail: String,
}

/// Error half of every handler result.
pub type HandlerError = (StatusCode, Json<ErrorResponse>);

pub(crate) fn error_response(status: StatusCode, detail: impl Into<String>) -> HandlerError {
    (
        status,
        Json(ErrorResponse {
            detail: detail.into(),
        }),
    )
}

/// Map a storage failure to a 500 carrying only `detail`; the cause is logged.
pub(crate) fn storage_failure(detail: &'static str) -> impl FnOnce(DbError) -> HandlerError {
    move |e| {
        error!(error = %e, "{}", detail);
        error_response(StatusCode::INTERNAL_SERVER_ERROR, detail)
    }
}

/// Fallback for unmatched routes.
pub async fn not_found() -> HandlerError {
    error_response(StatusCode::NOT_FOUND, "Not Found")
}
