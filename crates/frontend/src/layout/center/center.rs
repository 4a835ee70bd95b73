use crate::layout::global_context::AppGlobalContext;
use crate::layout::header::header::page_title;
use leptos::prelude::*;

/// Content area. Pages are owned by the host application; this renders a
/// placeholder card for the selected page key.
#[component]
pub fn Center() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <main data-zone="center" class="app-main" style="flex: 1; overflow: auto;">
            {move || {
                let key = ctx.page_or_home();
                view! {
                    <section class="page-card" data-page=key.clone()>
                        <h2 class="page-card__title">{page_title(&key)}</h2>
                        <p class="page-card__hint">"No content registered for this page yet."</p>
                    </section>
                }
            }}
        </main>
    }
}
