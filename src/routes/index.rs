use std::sync::Arc;

use axum::response::IntoResponse;
use folio_resume::ResumeData;

use crate::template::{Layout, Template};

const FEATURED_PROJECTS: usize = 3;

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub layout: Layout,
    pub resume: Arc<ResumeData>,
    pub featured: usize,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(IndexTemplate {
        layout: template.layout("home"),
        resume: template.resume.clone(),
        featured: FEATURED_PROJECTS,
    })
}
