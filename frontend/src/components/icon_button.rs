use leptos::*;

/// Icon-only button. `label` is used for both the tooltip and the accessible name.
#[component]
pub fn IconButton(
    #[prop(into)] label: MaybeSignal<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] expanded: Option<Signal<bool>>,
    #[prop(into)] on_click: Callback<ev::MouseEvent>,
    children: Children,
) -> impl IntoView {
    let full_class = match class {
        Some(extra) => format!("btn btn-icon {}", extra),
        None => "btn btn-icon".to_string(),
    };
    let title = label.clone();

    view! {
        <button
            type="button"
            class=full_class
            title=move || title.get()
            aria-label=move || label.get()
            aria-expanded=move || expanded.map(|open| open.get().to_string())
            on:click=move |ev| on_click.call(ev)
        >
            {children()}
        </button>
    }
}
