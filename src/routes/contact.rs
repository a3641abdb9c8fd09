use std::sync::Arc;

use axum::{
    Json,
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::{CookieJar, cookie::Cookie};
use folio_contact::{FAILURE_MESSAGE, FormFields, SubmissionStatus};
use folio_resume::ResumeData;
use serde::Serialize;
use validator::Validate;

use crate::{
    routes::AppState,
    template::{Layout, Template},
};

pub const REQUIRED_MESSAGE: &str = "Please fill in all required fields.";

/// One-shot marker left by a successful form post for the page it redirects to.
const FLASH_COOKIE: &str = "contact_flash";
const FLASH_SENT: &str = "sent";

fn flash_cookie(value: &'static str) -> Cookie<'static> {
    Cookie::build((FLASH_COOKIE, value))
        .path("/contact")
        .http_only(true)
        .build()
}

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub layout: Layout,
    pub resume: Arc<ResumeData>,
    pub fields: FormFields,
    pub status: SubmissionStatus,
    pub banner: Option<&'static str>,
}

impl ContactTemplate {
    fn new(template: &Template, fields: FormFields, status: SubmissionStatus) -> Self {
        Self {
            layout: template.layout("contact"),
            resume: template.resume.clone(),
            fields,
            status,
            banner: status.banner(),
        }
    }
}

/// GET /contact - empty form, with the success banner once after a form post
pub async fn page(template: Template, jar: CookieJar) -> impl IntoResponse {
    let sent = jar
        .get(FLASH_COOKIE)
        .is_some_and(|cookie| cookie.value() == FLASH_SENT);

    let (jar, status) = if sent {
        (jar.remove(flash_cookie("")), SubmissionStatus::Succeeded)
    } else {
        (jar, SubmissionStatus::Idle)
    };

    let page = template.render(ContactTemplate::new(
        &template,
        FormFields::default(),
        status,
    ));

    (jar, page)
}

/// POST /contact - form fallback for visitors without scripts
///
/// Success redirects back to the page so a refresh cannot resend; any failure
/// re-renders the form with the input kept.
pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    jar: CookieJar,
    Form(input): Form<FormFields>,
) -> impl IntoResponse {
    if input.validate().is_err() {
        let mut page = ContactTemplate::new(&template, input, SubmissionStatus::Failed);
        page.banner = Some(REQUIRED_MESSAGE);

        return (StatusCode::UNPROCESSABLE_ENTITY, template.render(page)).into_response();
    }

    match app_state.relay.deliver(&input).await {
        Ok(()) => (
            jar.add(flash_cookie(FLASH_SENT)),
            Redirect::to("/contact"),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Contact form relay failed");
            let page = ContactTemplate::new(&template, input, SubmissionStatus::Failed);

            (StatusCode::INTERNAL_SERVER_ERROR, template.render(page)).into_response()
        }
    }
}

#[derive(Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: &'static str,
}

/// POST /api/contact - JSON submission endpoint used by the contact form script
/// and by `folio send`
pub async fn api(
    State(app_state): State<AppState>,
    Json(input): Json<FormFields>,
) -> impl IntoResponse {
    if input.validate().is_err() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse {
                success: false,
                message: REQUIRED_MESSAGE,
            }),
        );
    }

    match app_state.relay.deliver(&input).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse {
                success: true,
                message: "Message sent successfully!",
            }),
        ),
        Err(err) => {
            tracing::error!(error = %err, "Contact API relay failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse {
                    success: false,
                    message: FAILURE_MESSAGE,
                }),
            )
        }
    }
}
