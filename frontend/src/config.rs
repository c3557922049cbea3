//! Static navigation and localization configuration.

use shared::LanguageOption;

/// Local storage key holding the user's preferred language.
pub const LANG_STORAGE_KEY: &str = "lang";

/// Language used until a preference is restored or selected.
pub const DEFAULT_LANGUAGE: &str = "en";

pub const SIGN_IN_PATH: &str = "/login";
pub const SIGN_UP_PATH: &str = "/register";
pub const PROFILE_PATH: &str = "/profile";

/// A top-level page reachable from the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavPage {
    pub id: u32,
    pub label_key: &'static str,
    pub path: &'static str,
}

/// Pages in the order they appear in both the mobile menu and the wide layout.
pub const PAGES: &[NavPage] = &[
    NavPage {
        id: 1,
        label_key: "navbar_main_page",
        path: "/",
    },
    NavPage {
        id: 2,
        label_key: "navbar_news_page",
        path: "/news",
    },
    NavPage {
        id: 3,
        label_key: "navbar_weather_page",
        path: "/weather",
    },
];

const LANGUAGES_JSON: &str = include_str!("translations/languages.json");

/// Get the list of selectable languages, in display order.
pub fn languages() -> Vec<LanguageOption> {
    parse_languages(LANGUAGES_JSON)
}

fn parse_languages(json: &str) -> Vec<LanguageOption> {
    match serde_json::from_str(json) {
        Ok(langs) => langs,
        Err(e) => {
            log::error!("invalid language list: {}", e);
            Vec::new()
        }
    }
}
