use crate::domain::a001_howto::ui::page::HowtoPage;
use crate::domain::a002_policy::ui::page::PoliciesPage;
use crate::domain::a003_resource::ui::page::ResourcesPage;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--empty">
            <p class="catalog-empty">"Page not found."</p>
        </div>
    }
}

/// Каждая каталожная страница монтируется по своему пути
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=|| view! { <Redirect path="/how-to" /> } />
                <Route path=path!("/how-to") view=HowtoPage />
                <Route path=path!("/policies") view=PoliciesPage />
                <Route path=path!("/resources") view=ResourcesPage />
            </Routes>
        </Router>
    }
}
