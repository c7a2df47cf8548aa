use contracts::shared::catalog::HeaderModel;
use leptos::prelude::*;

/// Шапка страницы и вводный блок текущего раздела
#[component]
pub fn CatalogHeader(
    /// Префикс CSS классов страницы: "howto", "policies", "resources"
    prefix: &'static str,
    header: RwSignal<HeaderModel>,
) -> impl IntoView {
    view! {
        <header class=format!("{prefix}-hero")>
            <h1 class=format!("{prefix}-page-title")>
                {move || header.with(|h| h.title.clone())}
            </h1>
            <p class=format!("{prefix}-page-sub")>
                {move || header.with(|h| h.subtitle.clone())}
            </p>
        </header>
    }
}

/// Заголовок и описание над списком; пустые строки не выводятся
#[component]
pub fn SectionIntro(prefix: &'static str, header: RwSignal<HeaderModel>) -> impl IntoView {
    view! {
        <div class=format!("{prefix}-section-intro")>
            {move || {
                let title = header.with(|h| h.intro_title.clone());
                (!title.is_empty())
                    .then(|| view! { <h2 class=format!("{prefix}-section-title")>{title}</h2> })
            }}
            {move || {
                let body = header.with(|h| h.intro_body.clone());
                (!body.is_empty())
                    .then(|| view! { <p class=format!("{prefix}-section-body")>{body}</p> })
            }}
        </div>
    }
}
