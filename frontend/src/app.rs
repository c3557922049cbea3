use std::rc::Rc;

use leptos::*;
use leptos_router::*;

use crate::components::navbar::Navbar;
use crate::config::{DEFAULT_LANGUAGE, PROFILE_PATH, SIGN_IN_PATH, SIGN_UP_PATH};
use crate::i18n::provide_i18n;
use crate::pages::placeholder::PlaceholderPage;
use crate::state::{AuthState, ThemeState};
use crate::storage::{BrowserStorage, PreferenceStore};

#[component]
pub fn App() -> impl IntoView {
    let auth_state = AuthState::new();
    provide_context(auth_state);

    let theme_state = ThemeState::default();
    provide_context(theme_state);

    // The navbar restores the stored language on mount
    let i18n = provide_i18n(DEFAULT_LANGUAGE);
    let storage: Rc<dyn PreferenceStore> = Rc::new(BrowserStorage);

    view! {
        <Router>
            <div class=move || format!("app {}", theme_state.theme.get().class_name())>
                <Navbar
                    auth=Signal::derive(move || auth_state.snapshot())
                    i18n=i18n
                    storage=storage
                    on_logout=move |_| auth_state.logout()
                    on_theme_switch=move |_| theme_state.switch()
                />
                <main class="container">
                    <Routes>
                        <Route path="/" view=|| view! { <PlaceholderPage title_key="navbar_main_page" /> } />
                        <Route path="/news" view=|| view! { <PlaceholderPage title_key="navbar_news_page" /> } />
                        <Route path="/weather" view=|| view! { <PlaceholderPage title_key="navbar_weather_page" /> } />
                        <Route path=SIGN_IN_PATH view=|| view! { <PlaceholderPage title_key="navbar_signin" /> } />
                        <Route path=SIGN_UP_PATH view=|| view! { <PlaceholderPage title_key="navbar_signup" /> } />
                        <Route path=PROFILE_PATH view=|| view! { <PlaceholderPage title_key="page_profile" /> } />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
