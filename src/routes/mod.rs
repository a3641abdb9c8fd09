use std::sync::Arc;

use axum::{
    Router,
    response::IntoResponse,
    routing::{get, post},
};
use folio_resume::ResumeData;

use crate::{error::AppError, relay::ContactRelay, template::Template};

mod about;
mod api;
mod contact;
mod health;
mod index;
mod projects;
mod resume;
mod theme;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub resume: Arc<ResumeData>,
    pub relay: ContactRelay,
}

impl AppState {
    pub async fn from_config(config: crate::config::Config) -> Result<Self, AppError> {
        let resume = folio_resume::load(&config.site.data_path).await?;
        let relay = ContactRelay::new(&config.email)?;

        Ok(Self {
            config,
            resume: Arc::new(resume),
            relay,
        })
    }
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.not_found()
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/about", get(about::page))
        .route("/resume", get(resume::page))
        .route("/projects", get(projects::page))
        .route("/contact", get(contact::page).post(contact::action))
        .route("/download-resume", get(resume::download))
        .route("/api/contact", post(contact::api))
        .route("/api/skills", get(api::skills))
        .route("/api/projects", get(api::projects))
        .route("/theme/toggle", post(theme::toggle))
        .fallback(fallback)
        .nest_service("/static", crate::assets::AssetsService::new())
        .with_state(app_state)
}
