use std::{io::ErrorKind, path::Path, sync::Arc};

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Redirect, Response},
};
use folio_resume::ResumeData;

use crate::{
    error::AppError,
    routes::AppState,
    template::{Layout, Template},
};

#[derive(askama::Template)]
#[template(path = "resume.html")]
pub struct ResumeTemplate {
    pub layout: Layout,
    pub resume: Arc<ResumeData>,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(ResumeTemplate {
        layout: template.layout("resume"),
        resume: template.resume.clone(),
    })
}

/// GET /download-resume - serves the resume document as an attachment
///
/// Redirects back to the resume page when the document is not deployed.
pub async fn download(State(app_state): State<AppState>) -> Result<Response, AppError> {
    let path = Path::new(&app_state.config.site.resume_path);

    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "Resume document not found");
            return Ok(Redirect::to("/resume").into_response());
        }
        Err(err) => return Err(err.into()),
    };

    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("resume.pdf")
        .replace('"', "");
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Ok((
        [
            (header::CONTENT_TYPE, mime.as_ref().to_owned()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response())
}
