use std::rc::Rc;

use leptos::*;
use leptos_router::*;
use shared::LanguageOption;
use thiserror::Error;

use crate::components::icon_button::IconButton;
use crate::components::icons::{BrandIcon, DarkModeIcon, MenuIcon};
use crate::config::{
    languages, LANG_STORAGE_KEY, PAGES, PROFILE_PATH, SIGN_IN_PATH, SIGN_UP_PATH,
};
use crate::i18n::I18nContext;
use crate::state::AuthSnapshot;
use crate::storage::{PreferenceStore, StorageError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    #[error("unsupported language '{0}'")]
    Unsupported(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// A page link as rendered in the mobile menu and the wide layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub label: String,
    pub path: &'static str,
}

/// Localized entries for every configured page, in configured order.
pub fn nav_entries(i18n: &I18nContext) -> Vec<NavEntry> {
    PAGES
        .iter()
        .map(|page| NavEntry {
            label: i18n.t(page.label_key),
            path: page.path,
        })
        .collect()
}

/// The right-hand side of the navbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrailingRegion {
    SignedOut,
    SignedIn { email: String },
}

pub fn trailing_region(auth: &AuthSnapshot) -> TrailingRegion {
    match auth.user() {
        Some(user) => TrailingRegion::SignedIn {
            email: user.email.clone(),
        },
        None => TrailingRegion::SignedOut,
    }
}

/// Event handlers behind the navbar.
///
/// Owns the mobile menu state; everything else goes to the injected
/// collaborators.
#[derive(Clone)]
pub struct NavbarController {
    menu_open: RwSignal<bool>,
    languages: Vec<LanguageOption>,
    i18n: I18nContext,
    storage: Rc<dyn PreferenceStore>,
    on_logout: Callback<()>,
    on_theme_switch: Callback<()>,
}

impl NavbarController {
    pub fn new(
        i18n: I18nContext,
        storage: Rc<dyn PreferenceStore>,
        on_logout: Callback<()>,
        on_theme_switch: Callback<()>,
    ) -> Self {
        Self {
            menu_open: create_rw_signal(false),
            languages: languages(),
            i18n,
            storage,
            on_logout,
            on_theme_switch,
        }
    }

    /// Languages offered by the picker, in display order.
    pub fn languages(&self) -> &[LanguageOption] {
        &self.languages
    }

    pub fn find_language(&self, key: &str) -> Option<&LanguageOption> {
        self.languages.iter().find(|lang| lang.key == key)
    }

    pub fn menu_open(&self) -> Signal<bool> {
        self.menu_open.into()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open.get()
    }

    pub fn open_menu(&self) {
        self.menu_open.set(true);
    }

    pub fn close_menu(&self) {
        self.menu_open.set(false);
    }

    /// Switch the UI language and remember it for the next visit.
    pub fn select_language(&self, lang: &LanguageOption) -> Result<(), LanguageError> {
        if self.find_language(&lang.key).is_none() {
            return Err(LanguageError::Unsupported(lang.key.clone()));
        }
        log::debug!("language selected: {} ({})", lang.key, lang.name);
        self.i18n.set_language(&lang.key);
        self.storage.set(LANG_STORAGE_KEY, &lang.key)?;
        Ok(())
    }

    /// Apply the stored language preference, if there is a supported one.
    ///
    /// Returns the language that was applied.
    pub fn restore_language(&self) -> Option<String> {
        let stored = self.storage.get(LANG_STORAGE_KEY)?;
        if self.find_language(&stored).is_none() {
            log::warn!("ignoring unsupported stored language '{}'", stored);
            return None;
        }
        log::info!("restoring language '{}'", stored);
        self.i18n.set_language(&stored);
        Some(stored)
    }

    pub fn logout(&self) {
        self.on_logout.call(());
    }

    pub fn switch_theme(&self) {
        self.on_theme_switch.call(());
    }
}

/// Site header: brand, page links, language picker, theme toggle and
/// sign-in or account controls.
///
/// Must be rendered inside a `Router`.
#[component]
pub fn Navbar(
    #[prop(into)] auth: Signal<AuthSnapshot>,
    i18n: I18nContext,
    storage: Rc<dyn PreferenceStore>,
    #[prop(into)] on_logout: Callback<()>,
    #[prop(into)] on_theme_switch: Callback<()>,
) -> impl IntoView {
    let controller = store_value(NavbarController::new(
        i18n,
        storage,
        on_logout,
        on_theme_switch,
    ));
    let menu_open = controller.with_value(NavbarController::menu_open);
    let language_options = controller.with_value(|c| c.languages().to_vec());

    create_effect(move |restored: Option<()>| {
        if restored.is_none() {
            untrack(|| controller.with_value(|c| c.restore_language()));
        }
    });

    let on_language_change = move |ev: ev::Event| {
        let key = event_target_value(&ev);
        let result = controller.with_value(|c| match c.find_language(&key) {
            Some(lang) => c.select_language(lang),
            None => Err(LanguageError::Unsupported(key.clone())),
        });
        if let Err(e) = result {
            log::warn!("language change failed: {}", e);
        }
    };

    view! {
        <header class="navbar">
            <div class="container navbar-content">
                <a href="#" class="navbar__brand navbar__brand--wide">
                    <BrandIcon />
                    <span class="navbar__brand-text">{move || i18n.t("navbar_brand")}</span>
                </a>

                <div class="navbar__mobile">
                    <IconButton
                        label=Signal::derive(move || i18n.t("navbar_open_menu"))
                        class="navbar__menu-trigger"
                        expanded=menu_open
                        on_click=move |_: ev::MouseEvent| controller.with_value(|c| c.open_menu())
                    >
                        <MenuIcon />
                    </IconButton>
                    <Show when=move || menu_open.get()>
                        <div
                            class="navbar__backdrop"
                            on:click=move |_| controller.with_value(|c| c.close_menu())
                        ></div>
                        <ul class="navbar__menu" role="menu">
                            {move || {
                                nav_entries(&i18n)
                                    .into_iter()
                                    .map(|entry| {
                                        view! {
                                            <li
                                                class="navbar__menu-item"
                                                role="menuitem"
                                                on:click=move |_| controller.with_value(|c| c.close_menu())
                                            >
                                                <A href=entry.path>{entry.label}</A>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </Show>
                </div>

                <a href="#" class="navbar__brand navbar__brand--narrow">
                    <BrandIcon />
                    <span class="navbar__brand-text">{move || i18n.t("navbar_brand")}</span>
                </a>

                <nav class="navbar__pages">
                    {move || {
                        nav_entries(&i18n)
                            .into_iter()
                            .map(|entry| {
                                view! {
                                    <A href=entry.path class="btn navbar__page">
                                        {entry.label}
                                    </A>
                                }
                            })
                            .collect_view()
                    }}
                </nav>

                <select
                    class="form-select navbar__language"
                    aria-label=move || i18n.t("navbar_language")
                    prop:value=move || i18n.current_language()
                    on:change=on_language_change
                >
                    {language_options
                        .into_iter()
                        .map(|lang| {
                            let key = lang.key.clone();
                            view! {
                                <option
                                    value=lang.key
                                    selected=move || i18n.current_language() == key
                                >
                                    {lang.name}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>

                <IconButton
                    label=Signal::derive(move || i18n.t("navbar_switch_theme"))
                    class="navbar__theme"
                    on_click=move |_: ev::MouseEvent| controller.with_value(|c| c.switch_theme())
                >
                    <DarkModeIcon />
                </IconButton>

                {move || match trailing_region(&auth.get()) {
                    TrailingRegion::SignedOut => view! {
                        <div class="navbar__auth">
                            <A href=SIGN_IN_PATH class="btn navbar__signin">
                                {i18n.t("navbar_signin")}
                            </A>
                            <A href=SIGN_UP_PATH class="btn navbar__signup">
                                {i18n.t("navbar_signup")}
                            </A>
                        </div>
                    }
                    .into_view(),
                    TrailingRegion::SignedIn { email } => view! {
                        <div class="navbar__auth">
                            <A href=PROFILE_PATH class="btn navbar__profile">
                                {email}
                            </A>
                            <button
                                type="button"
                                class="btn btn-outline navbar__logout"
                                on:click=move |_| controller.with_value(|c| c.logout())
                            >
                                {i18n.t("navbar_logout")}
                            </button>
                        </div>
                    }
                    .into_view(),
                }}
            </div>
        </header>
    }
}
