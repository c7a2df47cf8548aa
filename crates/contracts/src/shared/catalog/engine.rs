//! Фильтрация и сортировка выдачи. Чистые функции без состояния.

use super::filter_state::FilterState;
use crate::domain::common::{CatalogItem, FacetDim};
use icu_collator::{Collator, CollatorOptions, Strength};

thread_local! {
    static TITLE_COLLATOR: Option<Collator> = title_collator();
}

/// Проходит ли элемент все активные условия (конъюнкция)
pub fn matches<T: CatalogItem>(item: &T, filter: &FilterState) -> bool {
    if !item.is_displayable() {
        return false;
    }

    for dim in [FacetDim::Primary, FacetDim::Secondary] {
        if !filter.facet(dim).accepts(item.facet_value(dim)) {
            return false;
        }
    }

    let term = filter.search_term();
    term.is_empty() || item.search_haystack().contains(&term)
}

/// Выдача: отфильтрованные элементы, отсортированные по заголовку.
///
/// Заголовки сравниваются по правилам Unicode без учёта регистра (акценты
/// учитываются). Сортировка стабильная: при равных заголовках сохраняется
/// исходный порядок.
pub fn view<'a, T: CatalogItem>(items: &'a [T], filter: &FilterState) -> Vec<&'a T> {
    let mut out: Vec<&T> = items.iter().filter(|item| matches(*item, filter)).collect();
    TITLE_COLLATOR.with(|collator| match collator {
        Some(collator) => {
            out.sort_by(|a, b| collator.compare(a.display_title(), b.display_title()))
        }
        None => out.sort_by_cached_key(|item| item.display_title().to_lowercase()),
    });
    out
}

fn title_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Secondary);
    Collator::try_new(&Default::default(), options)
        .map_err(|e| log::warn!("title collator unavailable, sorting by lowercase: {:?}", e))
        .ok()
}
