//! Contact details handler.

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use super::{ErrorResponse, HandlerError, error_response, storage_failure};
use crate::api::AppState;
use crate::db::{ContactInfo, ContactInfoRepository, Database};

/// Public contact details
#[derive(Serialize, ToSchema)]
pub struct ContactInfoResponse {
    pub id: String,
    #[schema(example = "alex.chen@example.com")]
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub availability: Option<String>,
    pub response_time: Option<String>,
    pub updated_at: String,
}

impl From<ContactInfo> for ContactInfoResponse {
    fn from(i: ContactInfo) -> Self {
        Self {
            id: i.id,
            email: i.email,
            phone: i.phone,
            location: i.location,
            availability: i.availability,
            response_time: i.response_time,
            updated_at: i.updated_at.to_rfc3339(),
        }
    }
}

/// Get contact details
#[utoipa::path(
    get,
    path = "/api/contact-info",
    tag = "contact",
    responses(
        (status = 200, description = "Contact details", body = ContactInfoResponse),
        (status = 404, description = "No contact details stored", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_contact_info<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<ContactInfoResponse>, HandlerError> {
    let info = state
        .db()
        .contact_info()
        .get()
        .await
        .map_err(storage_failure("Failed to fetch contact information"))?;

    info.map(|i| Json(ContactInfoResponse::from(i)))
        .ok_or_else(|| error_response(StatusCode::NOT_FOUND, "Contact information not found"))
}
