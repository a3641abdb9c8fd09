use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use folio_resume::ResumeData;
use std::{convert::Infallible, sync::Arc};
use time::OffsetDateTime;

use crate::preference::{CookiePreferences, PreferenceStore, Theme};

/// Chrome shared by every page: nav, footer and the theme attribute.
#[derive(Clone, Debug)]
pub struct Layout {
    pub theme: Theme,
    pub year: i32,
    pub owner: String,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    active: &'static str,
}

impl Layout {
    pub fn is_active(&self, page: &str) -> bool {
        self.active == page
    }

    pub fn is_dark(&self) -> bool {
        self.theme == Theme::Dark
    }
}

#[derive(askama::Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub layout: Layout,
}

/// Request-scoped renderer carrying the visitor's theme and the resume record.
pub struct Template {
    theme: Theme,
    pub resume: Arc<ResumeData>,
}

impl Template {
    pub fn new(theme: Theme, resume: Arc<ResumeData>) -> Self {
        Self { theme, resume }
    }

    pub fn layout(&self, active: &'static str) -> Layout {
        let info = &self.resume.personal_info;

        Layout {
            theme: self.theme,
            year: OffsetDateTime::now_utc().year(),
            owner: info.name.to_owned(),
            github: info.social_links.github.to_owned(),
            linkedin: info.social_links.linkedin.to_owned(),
            active,
        }
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match template.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Failed to render template");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template. Error: {err}"),
                )
                    .into_response()
            }
        }
    }

    pub fn not_found(&self) -> Response {
        let page = self.render(NotFoundTemplate {
            layout: self.layout(""),
        });

        (StatusCode::NOT_FOUND, page).into_response()
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state).await?;
        let theme = CookiePreferences::new(jar).get();

        Ok(Template::new(theme, state.resume.clone()))
    }
}
