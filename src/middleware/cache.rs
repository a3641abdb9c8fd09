use axum::{
    body::Body,
    http::{HeaderValue, Request, Response, header},
    middleware::Next,
};

const STATIC_CACHE: &str = "public, max-age=86400";
const NO_CACHE: &str = "no-store, no-cache, must-revalidate";

/// Embedded assets may be cached for a day; pages and API responses never are.
pub async fn cache_control_middleware(req: Request<Body>, next: Next) -> Response<Body> {
    let is_static = req.uri().path().starts_with("/static/");
    let mut response = next.run(req).await;

    let value = if is_static { STATIC_CACHE } else { NO_CACHE };
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static(value));

    response
}
