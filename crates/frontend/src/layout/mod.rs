pub mod center;
pub mod global_context;
pub mod header;
pub mod left;

use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +-----------+------------------------------+
/// |           |            Header            |
/// |  Sidebar  +------------------------------+
/// |  (Left)   |        Content (Center)      |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell<L, H, C>(left: L, header: H, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    H: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <left::Left>
                {left()}
            </left::Left>

            <div class="app-body">
                {header()}
                {center()}
            </div>
        </div>
    }
}
