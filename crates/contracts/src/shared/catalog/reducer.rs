use super::content_store::ContentStore;
use super::engine;
use super::filter_state::{Facet, FilterState};
use super::tracker::{Tracker, TrackerPolicy};
use crate::domain::common::{CatalogItem, FacetDim};

/// Действия пользователя (и однократная загрузка данных)
#[derive(Debug, Clone)]
pub enum CatalogAction<T> {
    /// Хранилище заменяется целиком
    Loaded(ContentStore<T>),
    SetSearch(String),
    SetFacet(FacetDim, Facet),
    SelectItem(String),
    ToggleExpand(String),
}

/// Полное состояние одной страницы
#[derive(Debug)]
pub struct PageState<T> {
    pub store: ContentStore<T>,
    pub filter: FilterState,
    pub tracker: Tracker,
}

impl<T> Clone for PageState<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            filter: self.filter.clone(),
            tracker: self.tracker.clone(),
        }
    }
}

impl<T: CatalogItem> PageState<T> {
    pub fn new(filter: FilterState, policy: TrackerPolicy) -> Self {
        Self {
            store: ContentStore::pending(),
            filter,
            tracker: Tracker::for_policy(policy),
        }
    }

    /// Текущая выдача
    pub fn view(&self) -> Vec<&T> {
        engine::view(self.store.items(), &self.filter)
    }

    /// Выбранный элемент. При повторяющихся id берётся первый в выдаче.
    pub fn selected_item(&self) -> Option<&T> {
        let selected = self.tracker.selected_id()?;
        self.view().into_iter().find(|item| item.id() == selected)
    }

    fn reconcile(&mut self) {
        let view = engine::view(self.store.items(), &self.filter);
        let ids: Vec<&str> = view.iter().map(|item| item.id()).collect();
        self.tracker.reconcile(&ids);
    }
}

/// `reduce(state, action) → state'`: применить действие и согласовать
/// трекер с новой выдачей.
pub fn reduce<T: CatalogItem>(state: &PageState<T>, action: CatalogAction<T>) -> PageState<T> {
    let mut next = state.clone();

    match action {
        CatalogAction::Loaded(store) => {
            next.store = store;
        }
        CatalogAction::SetSearch(search) => {
            next.filter.search = search;
        }
        CatalogAction::SetFacet(dim, facet) => {
            next.filter.set_facet(dim, facet);
            if let Tracker::Selection(selection) = &mut next.tracker {
                selection.clear();
            }
        }
        CatalogAction::SelectItem(id) => match &mut next.tracker {
            Tracker::Selection(selection) => selection.select(&id),
            _ => log::debug!("select {} ignored: page has no selection", id),
        },
        CatalogAction::ToggleExpand(id) => match &mut next.tracker {
            Tracker::Expansion(expansion) => expansion.toggle(&id),
            _ => log::debug!("toggle {} ignored: page has no expanders", id),
        },
    }

    next.reconcile();
    next
}
