//! Skill handlers

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use super::{ErrorResponse, HandlerError, storage_failure};
use crate::api::AppState;
use crate::db::{Database, Skill, SkillRepository, SkillsByCategory};

// =============================================================================
// DTOs
// =============================================================================

#[derive(Serialize, ToSchema)]
pub struct SkillResponse {
    #[schema(example = "0b9e3a53-2f0e-4c55-8a3c-7d1c8a0f6b1e")]
    pub id: String,
    #[schema(example = "React")]
    pub name: String,
    /// Proficiency, 0-100
    #[schema(example = 95)]
    pub level: u8,
    /// Years of experience, 0-50
    #[schema(example = 4)]
    pub years: u8,
    /// One of frontend, backend, design, tools
    #[schema(example = "frontend")]
    pub category: String,
    pub created_at: String,
}

impl From<Skill> for SkillResponse {
    fn from(s: Skill) -> Self {
        Self {
            id: s.id,
            name: s.name,
            level: s.level,
            years: s.years,
            category: s.category.to_string(),
            created_at: s.created_at.to_rfc3339(),
        }
    }
}

/// Skills grouped by category; every key is always present.
#[derive(Serialize, ToSchema)]
pub struct SkillsResponse {
    pub frontend: Vec<SkillResponse>,
    pub backend: Vec<SkillResponse>,
    pub design: Vec<SkillResponse>,
    pub tools: Vec<SkillResponse>,
}

impl From<SkillsByCategory> for SkillsResponse {
    fn from(g: SkillsByCategory) -> Self {
        let convert = |skills: Vec<Skill>| skills.into_iter().map(SkillResponse::from).collect();
        Self {
            frontend: convert(g.frontend),
            backend: convert(g.backend),
            design: convert(g.design),
            tools: convert(g.tools),
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// List skills grouped by category
#[utoipa::path(
    get,
    path = "/api/skills",
    tag = "skills",
    responses(
        (status = 200, description = "Skills grouped by category", body = SkillsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_skills<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<SkillsResponse>, HandlerError> {
    let grouped = state
        .db()
        .skills()
        .list_grouped()
        .await
        .map_err(storage_failure("Failed to fetch skills"))?;

    Ok(Json(SkillsResponse::from(grouped)))
}
