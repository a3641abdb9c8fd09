use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use tower::ServiceExt;

mod common;
use common::create_test_app;

fn toggle(cookie: Option<&str>, referer: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("POST").uri("/theme/toggle");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    if let Some(referer) = referer {
        builder = builder.header(header::REFERER, referer);
    }
    builder.body(Body::empty()).unwrap()
}

fn set_cookie(response: &axum::http::Response<Body>) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_owned()
}

#[tokio::test]
async fn test_toggle_from_default_sets_dark() {
    let app = create_test_app();

    let response = app
        .oneshot(toggle(None, Some("http://localhost:3000/resume")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/resume");

    let cookie = set_cookie(&response);
    assert!(cookie.starts_with("theme=dark"), "got: {cookie}");
    assert!(cookie.contains("Path=/"));
    assert!(!cookie.contains("HttpOnly"));
}

#[tokio::test]
async fn test_toggle_from_dark_sets_light() {
    let app = create_test_app();

    let response = app.oneshot(toggle(Some("theme=dark"), None)).await.unwrap();

    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
    assert!(set_cookie(&response).starts_with("theme=light"));
}

#[tokio::test]
async fn test_toggle_ignores_unknown_theme() {
    let app = create_test_app();

    let response = app
        .oneshot(toggle(Some("theme=sepia"), None))
        .await
        .unwrap();

    assert!(set_cookie(&response).starts_with("theme=dark"));
}
