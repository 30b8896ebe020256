//! API route configuration.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{
    self, ContactCreated, ContactInfoResponse, ContactResponse, ContactSubmissionRequest,
    ErrorResponse, HealthResponse, ProjectResponse, RootResponse, SkillResponse, SkillsResponse,
    SubmitContactResponse,
};
use super::state::AppState;
use crate::db::Database;

/// Build routes with generic database type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "0.1.0",
        description = "Backend API for a portfolio website",
        license(name = "GPL-2.0")
    ),
    paths(
        handlers::root,
        handlers::health,
        handlers::list_projects,
        handlers::list_featured_projects,
        handlers::list_skills,
        handlers::submit_contact,
        handlers::get_contact_info,
        handlers::list_contacts,
    ),
    components(
        schemas(
            RootResponse,
            HealthResponse,
            ProjectResponse,
            SkillResponse,
            SkillsResponse,
            ContactSubmissionRequest,
            ContactCreated,
            SubmitContactResponse,
            ContactResponse,
            ContactInfoResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "projects", description = "Portfolio projects"),
        (name = "skills", description = "Skills grouped by category"),
        (name = "contact", description = "Contact form and contact details")
    )
)]
pub struct ApiDoc;

/// Create the API router.
///
/// All routes live under `/api`. CORS is fully permissive.
pub fn create_router<D: Database + 'static>(state: AppState<D>, enable_docs: bool) -> Router {
    // System routes (non-generic)
    let system_routes: Router<AppState<D>> = Router::new()
        .route("/api", get(handlers::root))
        .route("/api/", get(handlers::root))
        .route("/api/health", get(handlers::health));

    let data_routes = routes!(D => {
        get "/api/projects" => handlers::list_projects,
        get "/api/projects/featured" => handlers::list_featured_projects,
        get "/api/skills" => handlers::list_skills,
        post "/api/contact" => handlers::submit_contact,
        get "/api/contact-info" => handlers::get_contact_info,
        get "/api/contacts" => handlers::list_contacts,
    });

    let mut router = system_routes.merge(data_routes);

    if enable_docs {
        router = router.merge(Scalar::with_url("/api/docs", ApiDoc::openapi()));
    }

    router
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
