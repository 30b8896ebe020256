//! Project handlers.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use super::{ErrorResponse, HandlerError, storage_failure};
use crate::api::AppState;
use crate::db::{Database, Project, ProjectRepository};

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Project response DTO
#[derive(Serialize, ToSchema)]
pub struct ProjectResponse {
    /// Unique identifier (UUID)
    #[schema(example = "5f0c6f7e-4a43-4f4f-9a53-1c1f2b9a1e21")]
    pub id: String,
    #[schema(example = "E-commerce Platform")]
    pub title: String,
    #[schema(example = "A full-stack e-commerce solution")]
    pub description: String,
    /// Cover image URL
    #[schema(example = "https://images.example.com/shop.png")]
    pub image: String,
    #[schema(example = json!(["React", "Node.js"]))]
    pub technologies: Vec<String>,
    #[schema(example = "Full-Stack Development")]
    pub category: String,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub featured: bool,
    /// Creation timestamp (RFC 3339)
    #[schema(example = "2025-01-01T00:00:00Z")]
    pub created_at: String,
    /// Last update timestamp (RFC 3339)
    #[schema(example = "2025-01-01T00:00:00Z")]
    pub updated_at: String,
}

impl From<Project> for ProjectResponse {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            title: p.title,
            description: p.description,
            image: p.image,
            technologies: p.technologies,
            category: p.category,
            demo_url: p.demo_url,
            github_url: p.github_url,
            featured: p.featured,
            created_at: p.created_at.to_rfc3339(),
            updated_at: p.updated_at.to_rfc3339(),
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// List all projects
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    responses(
        (status = 200, description = "List of projects", body = Vec<ProjectResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_projects<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<Vec<ProjectResponse>>, HandlerError> {
    let projects = state
        .db()
        .projects()
        .list()
        .await
        .map_err(storage_failure("Failed to fetch projects"))?;

    Ok(Json(projects.into_iter().map(ProjectResponse::from).collect()))
}

/// List featured projects only
#[utoipa::path(
    get,
    path = "/api/projects/featured",
    tag = "projects",
    responses(
        (status = 200, description = "Projects with featured = true", body = Vec<ProjectResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_featured_projects<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<Vec<ProjectResponse>>, HandlerError> {
    let projects = state
        .db()
        .projects()
        .list_featured()
        .await
        .map_err(storage_failure("Failed to fetch featured projects"))?;

    Ok(Json(projects.into_iter().map(ProjectResponse::from).collect()))
}
