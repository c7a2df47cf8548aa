use super::filter_state::FilterState;
use super::reducer::PageState;
use super::tracker::{Tracker, TrackerPolicy};
use super::view_model::{ControlsModel, DetailPane, HeaderModel, ListModel};
use crate::domain::common::CatalogItem;
use crate::shared::branding::GlobalBranding;
use serde::de::DeserializeOwned;

/// Подписи страницы: собственный брендинг плюс общий (global.json)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Labels<B> {
    pub page: B,
    pub global: GlobalBranding,
}

impl<B> Labels<B> {
    pub fn new(page: B, global: GlobalBranding) -> Self {
        Self { page, global }
    }
}

/// Архетип каталожной страницы.
///
/// Страницы отличаются только набором фасетов, политикой трекера и тем,
/// как элементы превращаются в карточки/строки и панель деталей. Всё
/// остальное (загрузка, фильтр, сортировка, согласование выбора, полная
/// перерисовка) общее.
pub trait CatalogPage: 'static {
    type Item: CatalogItem + DeserializeOwned + Clone + Send + Sync + 'static;
    type Branding: DeserializeOwned + Default + Clone + Send + Sync + 'static;

    /// Имя файла в каталоге данных
    const DATA_FILE: &'static str;
    /// Имя файла в каталоге брендинга
    const BRANDING_FILE: &'static str;
    /// Поле ответа с массивом элементов
    const COLLECTION_FIELD: &'static str;
    /// Нужны ли подписи из branding/global.json
    const USES_GLOBAL_BRANDING: bool = false;
    const TRACKER: TrackerPolicy;

    fn initial_filter() -> FilterState {
        FilterState::default()
    }

    fn initial_state() -> PageState<Self::Item> {
        PageState::new(Self::initial_filter(), Self::TRACKER)
    }

    fn header(filter: &FilterState, labels: &Labels<Self::Branding>) -> HeaderModel;

    fn controls(filter: &FilterState, labels: &Labels<Self::Branding>) -> ControlsModel;

    /// Непустая выдача → список
    fn list(
        view: &[&Self::Item],
        tracker: &Tracker,
        labels: &Labels<Self::Branding>,
    ) -> ListModel;

    fn empty_message(labels: &Labels<Self::Branding>) -> String;

    /// Панель деталей; страницы без неё возвращают `None`
    fn detail(
        _selected: Option<&Self::Item>,
        _labels: &Labels<Self::Branding>,
    ) -> Option<DetailPane> {
        None
    }
}
