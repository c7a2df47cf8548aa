use super::choice_list::ChoiceList;
use crate::shared::frame_measure::fit_on_load;
use contracts::shared::catalog::{DetailContent, KeyedCard, LinkAction, ListModel};
use leptos::prelude::*;

/// Ссылка-кнопка; всегда открывается в новой вкладке
pub fn link_button(prefix: &'static str, link: LinkAction) -> impl IntoView {
    let class = if link.download {
        format!("btn ghost small {prefix}-item-btn-download")
    } else if link.primary {
        format!("btn primary small {prefix}-item-btn-link")
    } else {
        "btn ghost small".to_string()
    };
    let download = link.download.then_some("");

    view! {
        <a
            href=link.href
            class=class
            target="_blank"
            rel="noopener noreferrer"
            download=download
        >
            {link.label}
        </a>
    }
}

/// Содержимое раскрытой карточки
#[component]
pub fn DetailContentView(prefix: &'static str, content: DetailContent) -> impl IntoView {
    match content {
        DetailContent::Structured { paragraphs, steps } => view! {
            {paragraphs
                .into_iter()
                .map(|p| view! { <p class=format!("{prefix}-item-content-text")>{p}</p> })
                .collect_view()}
            {(!steps.is_empty()).then(|| view! {
                <ol class=format!("{prefix}-item-steps")>
                    {steps.into_iter().map(|s| view! { <li>{s}</li> }).collect_view()}
                </ol>
            })}
        }
        .into_any(),
        DetailContent::Frame(frame) => view! {
            <iframe
                class=format!("{prefix}-item-frame")
                src=frame.src
                title=frame.title
                allow=frame.allow
                allowfullscreen=frame.allow_fullscreen
                on:load=fit_on_load
            ></iframe>
        }
        .attr("loading", frame.lazy.then_some("lazy"))
        .into_any(),
        DetailContent::Unavailable(message) => view! {
            <p class=format!("{prefix}-item-content-fallback")>{message}</p>
        }
        .into_any(),
    }
}

/// Карточка, привязанная к ключу.
///
/// Содержимое раскрытия строится один раз и пересоздаётся только при
/// изменении самого содержимого; переключение меняет лишь `hidden` и подпись.
#[component]
pub fn CardView(
    prefix: &'static str,
    card_key: String,
    cards: Memo<Vec<KeyedCard>>,
    on_toggle: Callback<String>,
) -> impl IntoView {
    let card = Memo::new(move |_| {
        cards.with(|cards| {
            cards
                .iter()
                .find(|entry| entry.key == card_key)
                .map(|entry| entry.card.clone())
        })
    });
    let expander = Memo::new(move |_| {
        card.with(|c| {
            c.as_ref()
                .and_then(|c| c.expander.as_ref())
                .map(|e| (e.expanded, e.label.clone()))
        })
    });
    let content = Memo::new(move |_| {
        card.with(|c| {
            c.as_ref()
                .and_then(|c| c.expander.as_ref())
                .map(|e| e.content.clone())
        })
    });
    let expanded = move || expander.with(|e| e.as_ref().is_some_and(|(expanded, _)| *expanded));

    view! {
        <article class=format!("{prefix}-item-card")>
            <div class=format!("{prefix}-item-header")>
                <div class=format!("{prefix}-item-title")>
                    {move || card.with(|c| c.as_ref().map(|c| c.title.clone()))}
                </div>
                <span class=format!("{prefix}-item-program-pill")>
                    {move || card.with(|c| c.as_ref().map(|c| c.pill.clone()))}
                </span>
            </div>
            {move || card.with(|c| c.as_ref().and_then(|c| c.summary.clone())).map(|s| view! {
                <p class=format!("{prefix}-item-summary")>{s}</p>
            })}
            {move || card.with(|c| c.as_ref().and_then(|c| c.meta.clone())).map(|m| view! {
                <p class=format!("{prefix}-item-meta")>{m}</p>
            })}
            {move || content.get().map(|content| view! {
                <div class=format!("{prefix}-item-content") hidden=move || !expanded()>
                    <DetailContentView prefix=prefix content=content />
                </div>
            })}
            <div class=format!("{prefix}-item-footer")>
                {move || expander.get().map(|(is_expanded, label)| view! {
                    <button
                        type="button"
                        class=format!("btn ghost small {prefix}-item-toggle")
                        aria-expanded=is_expanded.to_string()
                        on:click=move |_| {
                            if let Some(id) = card.with_untracked(|c| c.as_ref().map(|c| c.id.clone())) {
                                on_toggle.run(id);
                            }
                        }
                    >
                        {label}
                    </button>
                })}
                {move || {
                    card.with(|c| c.as_ref().map(|c| c.links.clone()).unwrap_or_default())
                        .into_iter()
                        .map(|l| link_button(prefix, l))
                        .collect_view()
                }}
            </div>
        </article>
    }
}

/// Вид области списка без содержимого
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListShape {
    Pending,
    Empty,
    Cards,
    Choices,
}

impl ListShape {
    fn of(list: &ListModel) -> Self {
        match list {
            ListModel::Pending => ListShape::Pending,
            ListModel::Empty(_) => ListShape::Empty,
            ListModel::Cards(_) => ListShape::Cards,
            ListModel::Choices(_) => ListShape::Choices,
        }
    }
}

/// Область списка: пусто до загрузки, сообщение при пустой выдаче,
/// иначе карточки или строки выбора.
///
/// Карточки отрисовываются по ключу: новый рендер добавляет и убирает
/// только карточки, которых не было или больше нет.
#[component]
pub fn CatalogList(
    prefix: &'static str,
    list: RwSignal<ListModel>,
    #[prop(optional)] on_toggle: Option<Callback<String>>,
    #[prop(optional)] on_select: Option<Callback<String>>,
) -> impl IntoView {
    let on_toggle = on_toggle.unwrap_or_else(|| Callback::new(|_: String| {}));
    let on_select = on_select.unwrap_or_else(|| Callback::new(|_: String| {}));

    let shape = Memo::new(move |_| list.with(ListShape::of));
    let cards = Memo::new(move |_| list.with(ListModel::keyed_cards));

    move || match shape.get() {
        ListShape::Pending => ().into_any(),
        ListShape::Empty => view! {
            <p class=format!("{prefix}-empty")>
                {move || list.with(|l| match l {
                    ListModel::Empty(message) => message.clone(),
                    _ => String::new(),
                })}
            </p>
        }
        .into_any(),
        ListShape::Cards => view! {
            <div class=format!("{prefix}-list")>
                <For
                    each=move || cards.get()
                    key=|entry| entry.key.clone()
                    children=move |entry| view! {
                        <CardView prefix=prefix card_key=entry.key cards=cards on_toggle=on_toggle />
                    }
                />
            </div>
        }
        .into_any(),
        ListShape::Choices => (move || {
            let choices = list.with(|l| match l {
                ListModel::Choices(choices) => choices.clone(),
                _ => Vec::new(),
            });
            view! { <ChoiceList prefix=prefix choices=choices on_select=on_select /> }
        })
        .into_any(),
    }
}
