#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use folio::{
    AppState,
    config::{
        Config, ContactConfig, EmailConfig, ObservabilityConfig, ServerConfig, SiteConfig,
    },
    relay::ContactRelay,
};
use http_body_util::BodyExt;

pub const RESUME_JSON: &str = r#"{
    "personal_info": {
        "name": "Ada Lovelace",
        "tagline": "Analyst",
        "bio": "Writes programs for engines that do not exist yet.",
        "email": "ada@folio.localhost",
        "social_links": { "github": "https://github.com/ada", "linkedin": null }
    },
    "skills": {
        "programming_languages": [{ "name": "Rust", "level": 95 }],
        "frameworks_libraries": [{ "name": "axum", "level": "80%" }],
        "tools_technologies": []
    },
    "projects": [
        {
            "title": "Difference Engine",
            "date": "1843",
            "description": ["Bernoulli numbers"],
            "tech_stack": ["Brass"],
            "github_link": "https://github.com/ada/engine",
            "demo_link": ""
        }
    ]
}"#;

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        site: SiteConfig {
            data_path: "resume_data.json".to_string(),
            resume_path: "does-not-exist.pdf".to_string(),
        },
        contact: ContactConfig::default(),
        email: EmailConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub fn test_state(config: Config) -> AppState {
    AppState {
        config,
        resume: Arc::new(folio_resume::from_json(RESUME_JSON).unwrap()),
        relay: ContactRelay::log_only(),
    }
}

pub fn create_test_app() -> Router {
    folio::app(test_state(test_config()))
}

/// Relay pointed at a closed local port, so every delivery fails.
pub fn broken_relay() -> ContactRelay {
    ContactRelay::new(&EmailConfig {
        enabled: true,
        smtp_host: "127.0.0.1".to_string(),
        smtp_port: 1,
        to_email: "owner@folio.localhost".to_string(),
        ..EmailConfig::default()
    })
    .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn post_form(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(serde_urlencoded::to_string(fields).unwrap()))
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
