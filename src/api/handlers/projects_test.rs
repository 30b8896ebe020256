//! Integration tests for project endpoints.

use axum::http::StatusCode;

use crate::api::test_helpers::{get, json_body, send, test_app};
use crate::db::{Database, NewProject, Project, ProjectRepository, SeedData, seed_database};

fn make_project(title: &str, featured: bool) -> Project {
    Project::new(NewProject {
        title: title.to_string(),
        description: format!("{} description", title),
        image: "https://images.example.com/p.png".to_string(),
        technologies: vec!["Rust".to_string(), "SQLite".to_string()],
        category: "Backend".to_string(),
        demo_url: None,
        github_url: Some("https://github.com/example/p".to_string()),
        featured,
    })
    .expect("valid project")
}

// =============================================================================
// GET /api/projects
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn list_projects_empty_store_returns_empty_array() {
    let (app, _) = test_app().await;

    let response = send(&app, get("/api/projects")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, serde_json::json!([]));
}

#[tokio::test(flavor = "multi_thread")]
async fn list_projects_returns_all_fields() {
    let (app, state) = test_app().await;
    let project = make_project("Compiler", false);
    state.db().projects().create(&project).await.unwrap();

    let response = send(&app, get("/api/projects")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let projects = body.as_array().expect("Expected array");
    assert_eq!(projects.len(), 1);

    let p = &projects[0];
    assert_eq!(p["id"], project.id.as_str());
    assert_eq!(p["title"], "Compiler");
    assert_eq!(p["technologies"], serde_json::json!(["Rust", "SQLite"]));
    assert_eq!(p["category"], "Backend");
    assert!(p["demo_url"].is_null());
    assert_eq!(p["github_url"], "https://github.com/example/p");
    assert_eq!(p["featured"], false);
    assert!(p["created_at"].is_string());
    assert!(p["updated_at"].is_string());
}

#[tokio::test(flavor = "multi_thread")]
async fn list_projects_after_seeding_returns_six() {
    let (app, state) = test_app().await;
    seed_database(state.db(), &SeedData::default()).await.unwrap();

    let body = json_body(send(&app, get("/api/projects")).await).await;
    assert_eq!(body.as_array().unwrap().len(), 6);
}

// =============================================================================
// GET /api/projects/featured
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn featured_returns_only_featured() {
    let (app, state) = test_app().await;
    let repo = state.db().projects();
    repo.create(&make_project("One", true)).await.unwrap();
    repo.create(&make_project("Two", false)).await.unwrap();
    repo.create(&make_project("Three", true)).await.unwrap();

    let response = send(&app, get("/api/projects/featured")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let projects = body.as_array().unwrap();
    assert_eq!(projects.len(), 2);
    assert!(projects.iter().all(|p| p["featured"] == true));
    let titles: Vec<_> = projects.iter().map(|p| p["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["One", "Three"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn featured_empty_when_none_featured() {
    let (app, state) = test_app().await;
    state
        .db()
        .projects()
        .create(&make_project("Plain", false))
        .await
        .unwrap();

    let body = json_body(send(&app, get("/api/projects/featured")).await).await;
    assert_eq!(body, serde_json::json!([]));
}

// =============================================================================
// Storage failures
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn storage_failure_returns_500() {
    let (app, state) = test_app().await;
    state.db().close().await;

    let response = send(&app, get("/api/projects")).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json_body(response).await["detail"], "Failed to fetch projects");

    let response = send(&app, get("/api/projects/featured")).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(response).await["detail"],
        "Failed to fetch featured projects"
    );
}
