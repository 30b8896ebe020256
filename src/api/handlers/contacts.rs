//! Contact form handlers.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use utoipa::ToSchema;

use super::{ErrorResponse, HandlerError, error_response, storage_failure};
use crate::api::AppState;
use crate::db::{Contact, ContactRepository, ContactSubmission, Database};

// =============================================================================
// DTOs
// =============================================================================

/// Contact form submission
#[derive(Deserialize, ToSchema)]
pub struct ContactSubmissionRequest {
    /// Sender name, 1-100 characters
    #[schema(example = "John Smith")]
    pub name: String,
    #[schema(example = "john.smith@example.com")]
    pub email: String,
    /// 1-200 characters
    #[schema(example = "Project Collaboration")]
    pub subject: String,
    /// 1-2000 characters
    #[schema(example = "Hi, I'd like to discuss a project with you.")]
    pub message: String,
}

impl From<ContactSubmissionRequest> for ContactSubmission {
    fn from(req: ContactSubmissionRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            subject: req.subject,
            message: req.message,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct ContactCreated {
    /// Id of the stored contact
    pub id: String,
}

/// Reply to a successful submission
#[derive(Serialize, ToSchema)]
pub struct SubmitContactResponse {
    pub success: bool,
    #[schema(example = "Message sent successfully! I'll get back to you soon.")]
    pub message: String,
    pub data: ContactCreated,
}

/// Stored contact submission
#[derive(Serialize, ToSchema)]
pub struct ContactResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: String,
}

impl From<Contact> for ContactResponse {
    fn from(c: Contact) -> Self {
        Self {
            id: c.id,
            name: c.name,
            email: c.email,
            subject: c.subject,
            message: c.message,
            is_read: c.is_read,
            created_at: c.created_at.to_rfc3339(),
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Submit the contact form
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactSubmissionRequest,
    responses(
        (status = 200, description = "Message stored", body = SubmitContactResponse),
        (status = 400, description = "Malformed JSON body or missing content type", body = ErrorResponse),
        (status = 422, description = "Invalid field values", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, payload))]
pub async fn submit_contact<D: Database>(
    State(state): State<AppState<D>>,
    payload: Result<Json<ContactSubmissionRequest>, JsonRejection>,
) -> Result<Json<SubmitContactResponse>, HandlerError> {
    let Json(req) = payload.map_err(|rejection| {
        warn!(error = %rejection, "Rejected contact submission body");
        let status = match rejection {
            JsonRejection::MissingJsonContentType(_) => StatusCode::BAD_REQUEST,
            _ => rejection.status(),
        };
        error_response(status, rejection.body_text())
    })?;

    let contact = Contact::new(req.into()).map_err(|e| {
        warn!(error = %e, "Invalid contact submission");
        error_response(StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
    })?;

    let id = state
        .db()
        .contacts()
        .create(&contact)
        .await
        .map_err(storage_failure("Failed to submit contact form"))?;

    info!(
        name = %contact.name,
        subject = %contact.subject,
        "New contact submission"
    );

    Ok(Json(SubmitContactResponse {
        success: true,
        message: "Message sent successfully! I'll get back to you soon.".to_string(),
        data: ContactCreated { id },
    }))
}

/// List contact submissions, newest first
#[utoipa::path(
    get,
    path = "/api/contacts",
    tag = "contact",
    responses(
        (status = 200, description = "All submissions, newest first", body = Vec<ContactResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_contacts<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<Vec<ContactResponse>>, HandlerError> {
    let contacts = state
        .db()
        .contacts()
        .list()
        .await
        .map_err(storage_failure("Failed to fetch contacts"))?;

    Ok(Json(contacts.into_iter().map(ContactResponse::from).collect()))
}
