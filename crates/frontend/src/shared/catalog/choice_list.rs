use contracts::shared::catalog::ChoiceModel;
use leptos::prelude::*;

/// Список заголовков с одним активным элементом
#[component]
pub fn ChoiceList(
    prefix: &'static str,
    choices: Vec<ChoiceModel>,
    on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <ul class=format!("{prefix}-list")>
            {choices
                .into_iter()
                .map(|choice| {
                    let ChoiceModel { id, title, active } = choice;
                    let class = if active {
                        format!("{prefix}-list-button {prefix}-list-button-active")
                    } else {
                        format!("{prefix}-list-button")
                    };
                    view! {
                        <li class=format!("{prefix}-list-item")>
                            <button
                                type="button"
                                class=class
                                aria-current=active.then_some("true")
                                on:click=move |_| on_select.run(id.clone())
                            >
                                {title}
                            </button>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
