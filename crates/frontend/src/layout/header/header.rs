use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

/// Top bar of the dashboard: sidebar toggle, page title and greeting.
#[component]
pub fn Header(
    /// Same callback the sidebar receives as `on_toggle`
    on_toggle: Callback<()>,
) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let (auth_state, _) = use_auth();

    let title = move || page_title(&ctx.page_or_home());
    let greeting = move || {
        let name = auth_state.with(|state| state.profile().display_name());
        format!("Welcome back, {name}!")
    };

    view! {
        <header data-zone="header" class="header">
            <button
                class="header__icon-btn"
                aria-label="Toggle sidebar"
                on:click=move |_| on_toggle.run(())
            >
                {icon("menu")}
            </button>
            <div class="header__content">
                <h1 class="header__title">{title}</h1>
                <p class="header__subtitle">{greeting}</p>
            </div>
        </header>
    }
}

/// Title for a page key: dashes become spaces, words are capitalised.
pub fn page_title(key: &str) -> String {
    key.split('-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
