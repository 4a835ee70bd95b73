//! Application shell: wires the sidebar to the session, the page selection
//! and the router.

use crate::layout::center::Center;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::header::Header;
use crate::layout::left::{Navigator, Sidebar};
use crate::layout::Shell;
use crate::system::auth::context::{do_logout, use_auth, AuthState};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

/// Main application layout: sidebar, header and the routed content.
///
/// Resolves where sidebar clicks lead: menu ids select a page of the
/// dashboard route, the profile button opens the `/profile` route.
#[component]
pub fn MainLayout(children: ChildrenFn) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let (auth_state, set_auth_state) = use_auth();

    let pathname = use_location().pathname;
    let navigate = StoredValue::new(use_navigate());
    let go = move |path: &str| {
        if pathname.get_untracked() != path {
            navigate.with_value(|nav| nav(path, Default::default()));
        }
    };

    let on_page_change = Callback::new(move |page: String| {
        ctx.open_page(&page);
        go("/");
    });
    let on_navigate = Callback::new(move |route: String| go(&route));
    let navigator = Navigator::new(on_page_change).with_routes(on_navigate);

    let on_toggle = Callback::new(move |_: ()| ctx.toggle_sidebar());
    let on_logout = Callback::new(move |_: ()| {
        do_logout(set_auth_state);
        ctx.reset_page();
        go("/");
    });

    let role = Signal::derive(move || auth_state.with(AuthState::role));
    let user = Signal::derive(move || auth_state.with(AuthState::profile));

    view! {
        <Shell
            left=move || view! {
                <Sidebar
                    collapsed=ctx.sidebar_collapsed
                    current_page=ctx.current_page
                    role=role
                    user=user
                    navigator=navigator
                    on_logout=on_logout
                    on_toggle=on_toggle
                />
            }.into_any()
            header=move || view! { <Header on_toggle=on_toggle /> }.into_any()
            center=move || children().into_any()
        />
    }
}

/// Default content of the dashboard route.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! { <Center /> }
}
