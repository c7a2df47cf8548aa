use contracts::shared::catalog::{ControlsModel, DetailPane, HeaderModel, ListModel, ViewBinding};
use leptos::prelude::*;

/// Точки монтирования в виде сигналов Leptos.
///
/// Каждая перерисовка записывает модель целиком; компоненты подписаны
/// на свой сигнал и перестраивают свою часть DOM.
#[derive(Clone, Copy)]
pub struct SignalBinding {
    pub header: RwSignal<HeaderModel>,
    pub controls: RwSignal<ControlsModel>,
    pub list: RwSignal<ListModel>,
    pub detail: RwSignal<Option<DetailPane>>,
}

impl SignalBinding {
    pub fn new() -> Self {
        Self {
            header: RwSignal::new(HeaderModel::default()),
            controls: RwSignal::new(ControlsModel::default()),
            list: RwSignal::new(ListModel::Pending),
            detail: RwSignal::new(None),
        }
    }
}

impl Default for SignalBinding {
    fn default() -> Self {
        Self::new()
    }
}

// Страница могла быть размонтирована до завершения загрузки,
// поэтому запись только через try_set.
impl ViewBinding for SignalBinding {
    fn mount_header(&mut self, header: HeaderModel) {
        _ = self.header.try_set(header);
    }

    fn mount_controls(&mut self, controls: ControlsModel) {
        _ = self.controls.try_set(controls);
    }

    fn mount_list(&mut self, list: ListModel) {
        _ = self.list.try_set(list);
    }

    fn mount_detail(&mut self, detail: Option<DetailPane>) {
        _ = self.detail.try_set(detail);
    }
}
