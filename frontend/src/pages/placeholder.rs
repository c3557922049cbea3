use leptos::*;

use crate::i18n::use_i18n;

/// Stand-in body for routes whose pages live outside this crate.
#[component]
pub fn PlaceholderPage(#[prop(into)] title_key: String) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <section class="page">
            <h1 class="page-title">{move || i18n.t(&title_key)}</h1>
        </section>
    }
}
