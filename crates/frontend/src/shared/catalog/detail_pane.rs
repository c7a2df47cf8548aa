use super::card_list::link_button;
use contracts::shared::catalog::{DetailBody, DetailPane, DetailSection};
use leptos::prelude::*;

fn section_view(prefix: &'static str, section: DetailSection) -> impl IntoView {
    let DetailSection {
        title,
        bullets,
        paragraphs,
    } = section;

    view! {
        <section class=format!("{prefix}-detail-section")>
            {title.map(|t| view! { <h3 class=format!("{prefix}-detail-section-title")>{t}</h3> })}
            {(!bullets.is_empty()).then(|| view! {
                <ul class=format!("{prefix}-detail-list")>
                    {bullets.into_iter().map(|b| view! { <li>{b}</li> }).collect_view()}
                </ul>
            })}
            {paragraphs
                .into_iter()
                .map(|p| view! { <p class=format!("{prefix}-detail-paragraph")>{p}</p> })
                .collect_view()}
        </section>
    }
}

/// Панель деталей выбранного элемента
#[component]
pub fn DetailPaneView(prefix: &'static str, detail: RwSignal<Option<DetailPane>>) -> impl IntoView {
    move || {
        let Some(pane) = detail.get() else {
            return ().into_any();
        };
        let DetailPane {
            heading_label,
            intro,
            title,
            updated,
            actions,
            body,
        } = pane;

        view! {
            <aside class=format!("{prefix}-detail")>
                {heading_label.map(|l| view! { <p class=format!("{prefix}-detail-label")>{l}</p> })}
                {intro.map(|i| view! { <p class=format!("{prefix}-detail-intro")>{i}</p> })}
                {(!title.is_empty()).then(|| view! {
                    <h2 class=format!("{prefix}-detail-title")>{title}</h2>
                })}
                {updated.map(|u| view! { <p class=format!("{prefix}-detail-updated")>{u}</p> })}
                {(!actions.is_empty()).then(|| view! {
                    <div class=format!("{prefix}-detail-actions")>
                        {actions.into_iter().map(|a| link_button(prefix, a)).collect_view()}
                    </div>
                })}
                {body.map(|b| match b {
                    DetailBody::Sections(sections) => view! {
                        <div class=format!("{prefix}-detail-sections")>
                            {sections.into_iter().map(|s| section_view(prefix, s)).collect_view()}
                        </div>
                    }
                    .into_any(),
                    DetailBody::Empty(message) => view! {
                        <p class=format!("{prefix}-detail-empty")>{message}</p>
                    }
                    .into_any(),
                })}
            </aside>
        }
        .into_any()
    }
}
