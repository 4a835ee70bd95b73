//! Role-gated navigation sidebar with collapsible menu groups and a
//! profile/logout footer.

use super::actions::{apply_row_action, confirm_logout, BrowserConfirm, Navigator};
use super::expansion::ExpansionState;
use super::menu::{menu_for_raw_role, MenuItem, DEFAULT_EXPANDED, MENU_CATALOG};
use crate::shared::icons::icon;
use contracts::system::auth::{role_label, UserProfile};
use leptos::ev;
use leptos::prelude::*;

pub const PLACEHOLDER_AVATAR: &str = "https://images.pexels.com/photos/1681010/pexels-photo-1681010.jpeg?auto=compress&cs=tinysrgb&w=64&h=64&dpr=2";

#[component]
pub fn Sidebar(
    /// Narrow mode: icons only
    #[prop(into)]
    collapsed: Signal<bool>,

    /// Page highlighted in the menu
    #[prop(into)]
    current_page: Signal<Option<String>>,

    /// Role string of the session, `USER` when absent
    #[prop(into)]
    role: Signal<Option<String>>,

    #[prop(into)]
    user: Signal<UserProfile>,

    navigator: Navigator,

    /// Called once the user confirmed the logout prompt
    on_logout: Callback<()>,

    /// Collapse toggle of the hosting layout. Accepted but never called here;
    /// the header owns the toggle button.
    #[prop(optional)]
    on_toggle: Option<Callback<()>>,

    #[prop(default = MENU_CATALOG)]
    catalog: &'static [MenuItem],
) -> impl IntoView {
    let _ = on_toggle;

    let expanded = RwSignal::new(ExpansionState::with_default(catalog, DEFAULT_EXPANDED));
    let items = Memo::new(move |_| role.with(|r| menu_for_raw_role(catalog, r.as_deref())));

    view! {
        <aside class="app-sidebar" class:app-sidebar--collapsed=move || collapsed.get()>
            <div class="app-sidebar__brand">
                <div class="app-sidebar__logo">{icon("zap")}</div>
                <Show when=move || !collapsed.get()>
                    <div class="app-sidebar__brand-text">
                        <h1 class="app-sidebar__title">"Nexus"</h1>
                        <p class="app-sidebar__subtitle">"Admin Panel"</p>
                    </div>
                </Show>
            </div>

            <nav class="app-sidebar__content">
                {move || items.get().into_iter().map(|item| view! {
                    <MenuRow
                        item=item
                        collapsed=collapsed
                        current_page=current_page
                        expanded=expanded
                        navigator=navigator
                    />
                }).collect_view()}
            </nav>

            <SidebarFooter
                collapsed=collapsed
                user=user
                role=role
                navigator=navigator
                on_logout=on_logout
            />
        </aside>
    }
}

#[component]
fn MenuRow(
    item: &'static MenuItem,
    collapsed: Signal<bool>,
    current_page: Signal<Option<String>>,
    expanded: RwSignal<ExpansionState>,
    navigator: Navigator,
) -> impl IntoView {
    let is_active = move || current_page.with(|page| item.is_active(page.as_deref()));
    let is_expanded = move || expanded.with(|state| state.contains(item.id));

    let on_click = move |_: ev::MouseEvent| {
        apply_row_action(
            item.row_action(),
            |id| {
                expanded.update(|state| {
                    let open = state.toggle(id);
                    log::debug!("sidebar: '{id}' expanded={open}");
                });
            },
            |id| navigator.open_page(id),
        );
    };

    view! {
        <div class="app-sidebar__group">
            <button
                class="app-sidebar__item"
                class:app-sidebar__item--active=is_active
                title=move || collapsed.get().then_some(item.label)
                on:click=on_click
            >
                <div class="app-sidebar__item-content">
                    {icon(item.icon)}
                    <Show when=move || !collapsed.get()>
                        <span class="app-sidebar__label">{item.label}</span>
                        {item.badge.map(|badge| view! {
                            <span class="app-sidebar__badge">{badge}</span>
                        })}
                        {item.count.map(|count| view! {
                            <span class="app-sidebar__count">{count}</span>
                        })}
                    </Show>
                </div>
                {item.has_submenu().then(|| view! {
                    <Show when=move || !collapsed.get()>
                        <div
                            class="app-sidebar__chevron"
                            class:app-sidebar__chevron--expanded=is_expanded
                        >
                            {icon("chevron-down")}
                        </div>
                    </Show>
                })}
            </button>

            // Children
            {item.submenu.map(|submenu| view! {
                <Show when=move || !collapsed.get() && is_expanded()>
                    <div class="app-sidebar__children">
                        {submenu.iter().map(|sub| view! {
                            <button
                                class="app-sidebar__subitem"
                                on:click=move |_| navigator.open_page(sub.id)
                            >
                                {sub.label}
                            </button>
                        }).collect_view()}
                    </div>
                </Show>
            })}
        </div>
    }
}

#[component]
fn SidebarFooter(
    collapsed: Signal<bool>,
    user: Signal<UserProfile>,
    role: Signal<Option<String>>,
    navigator: Navigator,
    on_logout: Callback<()>,
) -> impl IntoView {
    let on_profile_click = move |_: ev::MouseEvent| navigator.open_profile();
    let on_logout_click = move |_: ev::MouseEvent| {
        confirm_logout(&BrowserConfirm, || on_logout.run(()));
    };

    let display_name = move || user.with(UserProfile::display_name);
    let role_caption = move || role.with(|r| role_label(r.as_deref()));
    let avatar = move || user.with(|u| u.avatar_or(PLACEHOLDER_AVATAR).to_string());

    view! {
        <Show
            when=move || !collapsed.get()
            fallback=move || view! {
                <div class="app-sidebar__footer app-sidebar__footer--collapsed">
                    <button class="app-sidebar__icon-btn" title="Profile" on:click=on_profile_click>
                        {icon("user")}
                    </button>
                    <button
                        class="app-sidebar__icon-btn app-sidebar__icon-btn--danger"
                        title="Logout"
                        on:click=on_logout_click
                    >
                        {icon("log-out")}
                    </button>
                </div>
            }
        >
            <div class="app-sidebar__footer">
                <button class="app-sidebar__profile" on:click=on_profile_click>
                    <img class="app-sidebar__avatar" src=avatar alt="user" />
                    <div class="app-sidebar__profile-text">
                        <p class="app-sidebar__profile-name">{display_name}</p>
                        <p class="app-sidebar__profile-role">{role_caption}</p>
                    </div>
                </button>
                <button class="app-sidebar__logout" on:click=on_logout_click>
                    {icon("log-out")}
                    <span>"Logout"</span>
                </button>
            </div>
        </Show>
    }
}
