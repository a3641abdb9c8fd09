use axum_extra::extract::{CookieJar, cookie::Cookie};
use strum::{AsRefStr, Display, EnumString};

pub const THEME_COOKIE: &str = "theme";

#[derive(EnumString, Display, AsRefStr, Default, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Where the visitor's theme choice lives between requests.
pub trait PreferenceStore {
    fn get(&self) -> Theme;
    fn set(&mut self, theme: Theme);
}

pub fn toggle_theme(store: &mut impl PreferenceStore) -> Theme {
    let theme = store.get().toggled();
    store.set(theme);
    theme
}

/// Keeps the theme in a long-lived cookie. Unknown values read as the default.
pub struct CookiePreferences {
    jar: CookieJar,
}

impl CookiePreferences {
    pub fn new(jar: CookieJar) -> Self {
        Self { jar }
    }

    pub fn into_jar(self) -> CookieJar {
        self.jar
    }
}

impl PreferenceStore for CookiePreferences {
    fn get(&self) -> Theme {
        self.jar
            .get(THEME_COOKIE)
            .and_then(|cookie| cookie.value().parse().ok())
            .unwrap_or_default()
    }

    fn set(&mut self, theme: Theme) {
        let cookie = Cookie::build((THEME_COOKIE, theme.to_string()))
            .path("/")
            .http_only(false)
            .permanent();

        self.jar = self.jar.clone().add(cookie);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    pub struct MemoryPreferences {
        theme: Theme,
    }

    impl PreferenceStore for MemoryPreferences {
        fn get(&self) -> Theme {
            self.theme
        }

        fn set(&mut self, theme: Theme) {
            self.theme = theme;
        }
    }

    #[test]
    fn test_toggle_flips_and_persists() {
        let mut store = MemoryPreferences::default();

        assert_eq!(toggle_theme(&mut store), Theme::Dark);
        assert_eq!(store.get(), Theme::Dark);
        assert_eq!(toggle_theme(&mut store), Theme::Light);
    }

    #[test]
    fn test_cookie_store_round_trip() {
        let mut store = CookiePreferences::new(CookieJar::new());
        assert_eq!(store.get(), Theme::Light);

        store.set(Theme::Dark);
        assert_eq!(store.get(), Theme::Dark);

        let jar = store.into_jar();
        assert_eq!(jar.get(THEME_COOKIE).map(|c| c.value()), Some("dark"));
    }

    #[test]
    fn test_cookie_store_ignores_garbage() {
        let jar = CookieJar::new().add(Cookie::new(THEME_COOKIE, "sepia"));

        assert_eq!(CookiePreferences::new(jar).get(), Theme::Light);
    }
}
