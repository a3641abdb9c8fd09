use std::sync::Arc;

use axum::response::IntoResponse;
use folio_resume::ResumeData;

use crate::template::{Layout, Template};

#[derive(askama::Template)]
#[template(path = "projects.html")]
pub struct ProjectsTemplate {
    pub layout: Layout,
    pub resume: Arc<ResumeData>,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(ProjectsTemplate {
        layout: template.layout("projects"),
        resume: template.resume.clone(),
    })
}
