pub mod assets;
pub mod cli;
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod preference;
pub mod relay;
pub mod routes;
pub mod template;

pub use config::Config;
pub use routes::AppState;

/// Application router with the response middleware applied
///
/// Used by `folio serve` and by the integration tests, so both exercise the
/// same stack.
pub fn app(state: AppState) -> axum::Router {
    routes::router(state)
        .layer(axum::middleware::from_fn(
            middleware::cache_control_middleware,
        ))
        .layer(axum::middleware::map_response(
            middleware::minify_html_middleware,
        ))
}
