use crate::app_shell::{DashboardPage, MainLayout};
use crate::system::pages::ProfilePage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <section class="page-card">
            <h2 class="page-card__title">"404"</h2>
            <p class="page-card__hint">"The page you're looking for doesn't exist."</p>
        </section>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <MainLayout>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=DashboardPage />
                    <Route path=path!("/profile") view=ProfilePage />
                </Routes>
            </MainLayout>
        </Router>
    }
}
