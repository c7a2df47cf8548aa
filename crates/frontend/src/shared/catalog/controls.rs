use contracts::domain::common::FacetDim;
use contracts::shared::catalog::{ControlsModel, Facet, FacetGroup, FacetOption, FacetStyle};
use leptos::prelude::*;

/// Поиск без задержки: каждое нажатие сразу уходит в контроллер
#[component]
pub fn SearchBox(
    prefix: &'static str,
    controls: RwSignal<ControlsModel>,
    on_input: Callback<String>,
) -> impl IntoView {
    let input_id = format!("{prefix}Search");

    view! {
        <div class=format!("{prefix}-search")>
            {move || {
                controls
                    .with(|c| c.search.label.clone())
                    .map(|label| view! {
                        <label class=format!("{prefix}-search-label") for=format!("{prefix}Search")>
                            {label}
                        </label>
                    })
            }}
            <input
                id=input_id
                class=format!("{prefix}-search-input")
                type="search"
                autocomplete="off"
                placeholder=move || controls.with(|c| c.search.placeholder.clone())
                prop:value=move || controls.with(|c| c.search.value.clone())
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

fn option_class(prefix: &str, style: FacetStyle, active: bool) -> String {
    let base = match style {
        FacetStyle::Pills => format!("{prefix}-filter-pill"),
        FacetStyle::Tabs => format!("{prefix}-tab"),
        FacetStyle::Browser => format!("{prefix}-program-button"),
    };
    if active {
        format!("{base} {base}-active")
    } else {
        base
    }
}

fn option_button(
    prefix: &'static str,
    style: FacetStyle,
    dim: FacetDim,
    option: FacetOption,
    on_select: Callback<(FacetDim, Facet)>,
) -> impl IntoView {
    let FacetOption {
        facet,
        label,
        active,
    } = option;
    let code = facet.code().to_string();
    let role = (style == FacetStyle::Tabs).then_some("tab");
    let selected = (style == FacetStyle::Tabs).then(|| active.to_string());

    view! {
        <button
            type="button"
            class=option_class(prefix, style, active)
            data-facet=code
            role=role
            aria-selected=selected
            on:click=move |_| on_select.run((dim, facet.clone()))
        >
            {label}
        </button>
    }
}

/// Одна группа фасетов; разметка зависит от стиля группы
#[component]
pub fn FacetGroupView(
    prefix: &'static str,
    group: FacetGroup,
    on_select: Callback<(FacetDim, Facet)>,
) -> impl IntoView {
    let FacetGroup {
        dim,
        style,
        label,
        options,
    } = group;

    match style {
        FacetStyle::Pills => view! {
            <div class=format!("{prefix}-filter-group")>
                {label.map(|l| view! { <p class=format!("{prefix}-filter-label")>{l}</p> })}
                <div class=format!("{prefix}-filter-options")>
                    {options
                        .into_iter()
                        .map(|o| option_button(prefix, style, dim, o, on_select))
                        .collect_view()}
                </div>
            </div>
        }
        .into_any(),
        FacetStyle::Tabs => view! {
            <div class=format!("{prefix}-tabs") role="tablist">
                {options
                    .into_iter()
                    .map(|o| option_button(prefix, style, dim, o, on_select))
                    .collect_view()}
            </div>
        }
        .into_any(),
        FacetStyle::Browser => view! {
            <div class=format!("{prefix}-program-browser")>
                {label.map(|l| view! { <p class=format!("{prefix}-program-label")>{l}</p> })}
                <ul class=format!("{prefix}-program-list")>
                    {options
                        .into_iter()
                        .map(|o| view! {
                            <li class=format!("{prefix}-program-item")>
                                {option_button(prefix, style, dim, o, on_select)}
                            </li>
                        })
                        .collect_view()}
                </ul>
            </div>
        }
        .into_any(),
    }
}

/// Боковая панель: kicker, поиск, примечание и все группы фасетов
#[component]
pub fn CatalogControls(
    prefix: &'static str,
    controls: RwSignal<ControlsModel>,
    on_search: Callback<String>,
    on_facet: Callback<(FacetDim, Facet)>,
) -> impl IntoView {
    view! {
        <div class=format!("{prefix}-filters")>
            {move || {
                controls
                    .with(|c| c.kicker.clone())
                    .map(|k| view! { <p class=format!("{prefix}-filter-kicker")>{k}</p> })
            }}
            <SearchBox prefix=prefix controls=controls on_input=on_search />
            {move || {
                controls
                    .with(|c| c.note.clone())
                    .map(|n| view! { <p class=format!("{prefix}-filter-note")>{n}</p> })
            }}
            {move || {
                controls
                    .with(|c| c.facets.clone())
                    .into_iter()
                    .map(|group| view! {
                        <FacetGroupView prefix=prefix group=group on_select=on_facet />
                    })
                    .collect_view()
            }}
        </div>
    }
}
