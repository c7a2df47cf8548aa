use crate::routes::routes::AppRoutes;
use contracts::shared::config::SiteConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Asset roots are shared by every catalog page.
    provide_context(SiteConfig::default());

    view! {
        <AppRoutes />
    }
}
