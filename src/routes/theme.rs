use axum::{
    http::{HeaderMap, Uri, header},
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::CookieJar;

use crate::preference::{CookiePreferences, toggle_theme};

/// POST /theme/toggle - flips the stored theme and goes back where the visitor was
pub async fn toggle(jar: CookieJar, headers: HeaderMap) -> impl IntoResponse {
    let mut store = CookiePreferences::new(jar);
    let theme = toggle_theme(&mut store);
    tracing::debug!(%theme, "Theme toggled");

    (store.into_jar(), Redirect::to(&back_path(&headers)))
}

/// Path of the referring page; the host part is dropped so the redirect stays on site.
fn back_path(headers: &HeaderMap) -> String {
    headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<Uri>().ok())
        .map(|uri| {
            uri.path_and_query()
                .map(|pq| pq.as_str().to_owned())
                .unwrap_or_else(|| "/".to_owned())
        })
        .filter(|path| path.starts_with('/') && !path.starts_with("//"))
        .unwrap_or_else(|| "/".to_owned())
}
