use super::page::{CatalogPage, Labels};
use super::reducer::PageState;
use super::view_model::{ControlsModel, DetailPane, HeaderModel, ListModel};

/// Точки монтирования страницы.
///
/// Рендер не знает про DOM: браузерная реализация пишет модели в сигналы
/// Leptos, тестовая складывает их в память.
pub trait ViewBinding {
    /// Начало полной перерисовки
    fn begin_rebuild(&mut self) {}

    fn mount_header(&mut self, header: HeaderModel);

    fn mount_controls(&mut self, controls: ControlsModel);

    fn mount_list(&mut self, list: ListModel);

    fn mount_detail(&mut self, detail: Option<DetailPane>);
}

/// Полная перерисовка страницы из состояния. Инкрементальных обновлений нет:
/// каждая точка монтирования получает модель целиком.
pub fn render<P, V>(state: &PageState<P::Item>, labels: &Labels<P::Branding>, binding: &mut V)
where
    P: CatalogPage,
    V: ViewBinding,
{
    binding.begin_rebuild();
    binding.mount_header(P::header(&state.filter, labels));
    binding.mount_controls(P::controls(&state.filter, labels));

    if !state.store.is_loaded() {
        binding.mount_list(ListModel::Pending);
        binding.mount_detail(P::detail(None, labels));
        return;
    }

    let view = state.view();
    if view.is_empty() {
        binding.mount_list(ListModel::Empty(P::empty_message(labels)));
        binding.mount_detail(P::detail(None, labels));
        return;
    }

    binding.mount_list(P::list(&view, &state.tracker, labels));
    binding.mount_detail(P::detail(state.selected_item(), labels));
}

/// Привязка в памяти для тестов: хранит последние модели и число
/// перерисовок.
#[derive(Debug, Clone, Default)]
pub struct RecordingBinding {
    pub header: HeaderModel,
    pub controls: ControlsModel,
    pub list: ListModel,
    pub detail: Option<DetailPane>,
    pub rebuilds: usize,
}

impl ViewBinding for RecordingBinding {
    fn begin_rebuild(&mut self) {
        self.rebuilds += 1;
    }

    fn mount_header(&mut self, header: HeaderModel) {
        self.header = header;
    }

    fn mount_controls(&mut self, controls: ControlsModel) {
        self.controls = controls;
    }

    fn mount_list(&mut self, list: ListModel) {
        self.list = list;
    }

    fn mount_detail(&mut self, detail: Option<DetailPane>) {
        self.detail = detail;
    }
}

impl RecordingBinding {
    /// Заголовки карточек или строк списка в порядке показа
    pub fn list_titles(&self) -> Vec<String> {
        match &self.list {
            ListModel::Cards(cards) => cards.iter().map(|c| c.title.clone()).collect(),
            ListModel::Choices(choices) => choices.iter().map(|c| c.title.clone()).collect(),
            _ => Vec::new(),
        }
    }

    pub fn empty_message(&self) -> Option<&str> {
        match &self.list {
            ListModel::Empty(message) => Some(message),
            _ => None,
        }
    }

    /// Коды активных вариантов во всех группах фасетов
    pub fn active_facets(&self) -> Vec<String> {
        self.controls
            .facets
            .iter()
            .filter_map(|group| group.active_option())
            .map(|option| option.facet.code().to_string())
            .collect()
    }
}
