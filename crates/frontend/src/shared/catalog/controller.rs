use super::binding::SignalBinding;
use crate::shared::api_utils::{asset_url, load_branding, load_store};
use contracts::domain::common::FacetDim;
use contracts::shared::branding::GlobalBranding;
use contracts::shared::catalog::{
    reduce, render, CatalogAction, CatalogPage, Facet, Labels, PageState,
};
use contracts::shared::config::SiteConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::marker::PhantomData;

const GLOBAL_BRANDING_FILE: &str = "global.json";

/// Контроллер страницы: владеет состоянием и подписями, применяет действия
/// через `reduce` и после каждого действия делает одну полную перерисовку.
pub struct CatalogController<P: CatalogPage> {
    state: StoredValue<PageState<P::Item>>,
    labels: StoredValue<Labels<P::Branding>>,
    pub binding: SignalBinding,
    _page: PhantomData<fn() -> P>,
}

impl<P: CatalogPage> Clone for CatalogController<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: CatalogPage> Copy for CatalogController<P> {}

impl<P: CatalogPage> CatalogController<P> {
    pub fn new() -> Self {
        Self {
            state: StoredValue::new(P::initial_state()),
            labels: StoredValue::new(Labels::default()),
            binding: SignalBinding::new(),
            _page: PhantomData,
        }
    }

    /// Создать контроллер, отрисовать каркас и запустить загрузку
    pub fn start(config: &SiteConfig) -> Self {
        let controller = Self::new();
        controller.render();
        controller.load(config);
        controller
    }

    /// Брендинг и данные грузятся параллельно; список появляется только
    /// после данных, подписи применяются, когда придут.
    fn load(self, config: &SiteConfig) {
        let branding_url = asset_url(&config.branding_path(P::BRANDING_FILE));
        spawn_local(async move {
            let page: P::Branding = load_branding(&branding_url).await;
            if self.labels.try_update_value(|labels| labels.page = page).is_some() {
                self.render();
            }
        });

        if P::USES_GLOBAL_BRANDING {
            let global_url = asset_url(&config.branding_path(GLOBAL_BRANDING_FILE));
            spawn_local(async move {
                let global: GlobalBranding = load_branding(&global_url).await;
                if self.labels.try_update_value(|labels| labels.global = global).is_some() {
                    self.render();
                }
            });
        }

        let data_url = asset_url(&config.data_path(P::DATA_FILE));
        spawn_local(async move {
            let store = load_store::<P::Item>(&data_url, P::COLLECTION_FIELD).await;
            log::debug!("{}: {} items loaded", data_url, store.items().len());
            self.dispatch(CatalogAction::Loaded(store));
        });
    }

    pub fn dispatch(self, action: CatalogAction<P::Item>) {
        let updated = self
            .state
            .try_update_value(|state| *state = reduce(state, action));
        if updated.is_some() {
            self.render();
        }
    }

    pub fn set_search(self, search: String) {
        self.dispatch(CatalogAction::SetSearch(search));
    }

    pub fn set_facet(self, dim: FacetDim, facet: Facet) {
        self.dispatch(CatalogAction::SetFacet(dim, facet));
    }

    pub fn select(self, id: String) {
        self.dispatch(CatalogAction::SelectItem(id));
    }

    pub fn toggle(self, id: String) {
        self.dispatch(CatalogAction::ToggleExpand(id));
    }

    /// Полная перерисовка из текущего состояния
    pub fn render(self) {
        let mut binding = self.binding;
        let rendered = self.state.try_with_value(|state| {
            self.labels
                .try_with_value(|labels| render::<P, _>(state, labels, &mut binding))
        });
        if rendered.flatten().is_none() {
            log::debug!("{}: page disposed, render skipped", P::DATA_FILE);
        }
    }
}

impl<P: CatalogPage> Default for CatalogController<P> {
    fn default() -> Self {
        Self::new()
    }
}
