use std::sync::Arc;

use axum::response::IntoResponse;
use folio_resume::ResumeData;

use crate::template::{Layout, Template};

#[derive(askama::Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub layout: Layout,
    pub resume: Arc<ResumeData>,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(AboutTemplate {
        layout: template.layout("about"),
        resume: template.resume.clone(),
    })
}
