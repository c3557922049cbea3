use std::collections::HashMap;
use leptos::*;

/// Translation data loaded from JSON files
type Translations = HashMap<String, String>;

/// Locale context passed to components that render localized text.
///
/// Holds the active language key and the matching translation table.
/// Both live in signals, so views reading them re-render on a language change.
#[derive(Clone, Copy)]
pub struct I18nContext {
    pub language: RwSignal<String>,
    translations: RwSignal<Translations>,
}

impl I18nContext {
    /// Create a new I18nContext with the specified language
    pub fn new(language: impl Into<String>) -> Self {
        let language = language.into();
        let translations = load_translations(&language);
        Self {
            language: create_rw_signal(language),
            translations: create_rw_signal(translations),
        }
    }

    /// Translate a key to the current language
    /// Returns the key itself if translation is not found
    pub fn t(&self, key: &str) -> String {
        self.translations
            .with(|translations| translations.get(key).cloned())
            .unwrap_or_else(|| key.to_string())
    }

    /// Change the current language.
    ///
    /// Unknown keys are recorded as the active language but render with the
    /// English tables.
    pub fn set_language(&self, lang: &str) {
        let translations = load_translations(lang);
        self.language.set(lang.to_string());
        self.translations.set(translations);
    }

    /// Get the current language code
    pub fn current_language(&self) -> String {
        self.language.get()
    }
}

fn translation_source(lang: &str) -> &'static str {
    match lang {
        "uk" => include_str!("../translations/uk.json"),
        "fr" => include_str!("../translations/fr.json"),
        "de" => include_str!("../translations/de.json"),
        _ => include_str!("../translations/en.json"),
    }
}

/// Load translations for a language from embedded JSON
fn load_translations(lang: &str) -> Translations {
    serde_json::from_str(translation_source(lang)).unwrap_or_else(|e| {
        log::error!("invalid translation table for '{}': {}", lang, e);
        Translations::default()
    })
}

/// Provide I18n context to the application
pub fn provide_i18n(language: impl Into<String>) -> I18nContext {
    let ctx = I18nContext::new(language);
    provide_context(ctx);
    ctx
}

/// Use the I18n context from within a component
pub fn use_i18n() -> I18nContext {
    expect_context::<I18nContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::languages;

    #[test]
    fn test_load_translations_en() {
        let translations = load_translations("en");
        assert!(!translations.is_empty());
        assert_eq!(translations.get("navbar_signin").unwrap(), "Sign in");
    }

    #[test]
    fn test_load_translations_fr() {
        let translations = load_translations("fr");
        assert_eq!(translations.get("navbar_signin").unwrap(), "Se connecter");
    }

    #[test]
    fn test_load_translations_fallback() {
        let translations = load_translations("invalid");
        assert!(!translations.is_empty());
        // Should fallback to English
        assert_eq!(translations.get("navbar_logout").unwrap(), "Log out");
    }

    #[test]
    fn test_every_language_has_every_key() {
        let reference = load_translations("en");
        for lang in languages() {
            let translations = load_translations(&lang.key);
            let missing: Vec<&String> = reference
                .keys()
                .filter(|key| !translations.contains_key(*key))
                .collect();
            assert!(missing.is_empty(), "{} is missing {:?}", lang.key, missing);
        }
    }

    #[test]
    fn test_missing_key_renders_as_key() {
        let runtime = create_runtime();
        let i18n = I18nContext::new("en");
        assert_eq!(i18n.t("no_such_key"), "no_such_key");
        runtime.dispose();
    }

    #[test]
    fn test_set_language_switches_table() {
        let runtime = create_runtime();
        let i18n = I18nContext::new("en");
        assert_eq!(i18n.t("navbar_news_page"), "News");

        i18n.set_language("de");
        assert_eq!(i18n.current_language(), "de");
        assert_eq!(i18n.t("navbar_news_page"), "Nachrichten");

        i18n.set_language("zz");
        assert_eq!(i18n.current_language(), "zz");
        assert_eq!(i18n.t("navbar_news_page"), "News");
        runtime.dispose();
    }
}
