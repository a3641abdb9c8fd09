use axum::http::{StatusCode, header};
use tower::ServiceExt;

mod common;
use common::{body_string, create_test_app, get};

#[tokio::test]
async fn test_pages_render_owner_name() {
    for uri in ["/", "/about", "/resume", "/projects", "/contact"] {
        let app = create_test_app();
        let response = app.oneshot(get(uri)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK, "{uri} should render");

        let html = body_string(response).await;
        assert!(html.contains("Ada Lovelace"), "{uri} should show the owner");
        assert!(html.contains("data-bs-theme=\"light\""));
    }
}

#[tokio::test]
async fn test_index_lists_featured_projects_and_skills() {
    let app = create_test_app();

    let html = body_string(app.oneshot(get("/")).await.unwrap()).await;

    assert!(html.contains("Difference Engine"));
    assert!(html.contains("Programming Languages"));
    assert!(html.contains("Rust"));
    // Empty skill groups are not shown
    assert!(!html.contains("Tools &amp; Technologies"));
}

#[tokio::test]
async fn test_resume_page_emits_skill_widths() {
    let app = create_test_app();

    let html = body_string(app.oneshot(get("/resume")).await.unwrap()).await;

    assert!(html.contains("data-width=\"95%\""));
    assert!(html.contains("data-width=\"80%\""));
    assert!(html.contains("href=\"/download-resume\""));
}

#[tokio::test]
async fn test_projects_page_skips_blank_links() {
    let app = create_test_app();

    let html = body_string(app.oneshot(get("/projects")).await.unwrap()).await;

    assert!(html.contains("https://github.com/ada/engine"));
    assert!(!html.contains("Live Demo"));
}

#[tokio::test]
async fn test_dark_theme_cookie_is_applied() {
    let app = create_test_app();

    let request = axum::http::Request::builder()
        .uri("/about")
        .header(header::COOKIE, "theme=dark")
        .body(axum::body::Body::empty())
        .unwrap();
    let html = body_string(app.oneshot(request).await.unwrap()).await;

    assert!(html.contains("data-bs-theme=\"dark\""));
    assert!(html.contains("Switch to Light Mode"));
}

#[tokio::test]
async fn test_unknown_path_renders_not_found() {
    let app = create_test_app();

    let response = app.oneshot(get("/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let html = body_string(response).await;
    assert!(html.contains("Page not found"));
}

#[tokio::test]
async fn test_pages_are_not_cached() {
    let app = create_test_app();

    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-store, no-cache, must-revalidate"
    );
}

#[tokio::test]
async fn test_health() {
    let app = create_test_app();

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["status"], "ok");
}
