//! Модель представления страницы: то, что рендер отдаёт в точки монтирования.
//!
//! Состояние кнопок (active / expanded) всегда вычисляется заново из
//! FilterState и трекера, а не берётся из предыдущего DOM.

use super::detail::DetailContent;
use super::filter_state::Facet;
use crate::domain::common::FacetDim;
use std::collections::HashMap;

/// Шапка страницы и вводный блок текущего раздела
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderModel {
    pub title: String,
    pub subtitle: String,
    pub intro_title: String,
    pub intro_body: String,
}

/// Внешний вид группы фасетов
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetStyle {
    /// Кнопки-таблетки (how-to)
    Pills,
    /// Вкладки (политики)
    Tabs,
    /// Список-браузер слева (ресурсы)
    Browser,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetOption {
    pub facet: Facet,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetGroup {
    pub dim: FacetDim,
    pub style: FacetStyle,
    pub label: Option<String>,
    pub options: Vec<FacetOption>,
}

impl FacetGroup {
    /// Построить группу, отметив активный вариант по текущему фасету
    pub fn build(
        dim: FacetDim,
        style: FacetStyle,
        label: Option<String>,
        current: &Facet,
        options: Vec<(Facet, String)>,
    ) -> Self {
        let options = options
            .into_iter()
            .map(|(facet, label)| FacetOption {
                active: &facet == current,
                facet,
                label,
            })
            .collect();
        Self {
            dim,
            style,
            label,
            options,
        }
    }

    pub fn active_option(&self) -> Option<&FacetOption> {
        self.options.iter().find(|o| o.active)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchModel {
    pub label: Option<String>,
    pub placeholder: String,
    pub value: String,
}

/// Боковая панель: поиск и фасеты
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlsModel {
    pub kicker: Option<String>,
    pub note: Option<String>,
    pub search: SearchModel,
    pub facets: Vec<FacetGroup>,
    pub list_heading: Option<String>,
}

/// Ссылка-кнопка (скачать / открыть)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkAction {
    pub href: String,
    pub label: String,
    pub download: bool,
    pub primary: bool,
}

/// Раскрывающаяся часть карточки
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expander {
    pub expanded: bool,
    /// Текущая подпись кнопки (зависит от expanded)
    pub label: String,
    pub content: DetailContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardModel {
    pub id: String,
    pub title: String,
    pub pill: String,
    pub summary: Option<String>,
    pub meta: Option<String>,
    pub expander: Option<Expander>,
    pub links: Vec<LinkAction>,
}

/// Строка списка с выбором одного элемента
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceModel {
    pub id: String,
    pub title: String,
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListModel {
    /// Данные ещё не загружены
    #[default]
    Pending,
    /// Пустая выдача: единственное сообщение
    Empty(String),
    Cards(Vec<CardModel>),
    Choices(Vec<ChoiceModel>),
}

/// Карточка со стабильным ключом для отрисовки по ключу
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedCard {
    pub key: String,
    pub card: CardModel,
}

impl ListModel {
    /// Карточки с ключами: id, а у повторов id добавляется номер повтора.
    ///
    /// Ключ карточки не зависит от её состояния, поэтому переключение
    /// раскрытия не меняет набор ключей.
    pub fn keyed_cards(&self) -> Vec<KeyedCard> {
        let ListModel::Cards(cards) = self else {
            return Vec::new();
        };
        let mut seen: HashMap<&str, usize> = HashMap::new();
        cards
            .iter()
            .map(|card| {
                let repeat = seen.entry(card.id.as_str()).or_insert(0);
                let key = match *repeat {
                    0 => card.id.clone(),
                    n => format!("{}#{}", card.id, n),
                };
                *repeat += 1;
                KeyedCard {
                    key,
                    card: card.clone(),
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSection {
    pub title: Option<String>,
    pub bullets: Vec<String>,
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailBody {
    Sections(Vec<DetailSection>),
    Empty(String),
}

/// Панель деталей выбранного элемента
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailPane {
    pub heading_label: Option<String>,
    /// Подсказка, пока ничего не выбрано
    pub intro: Option<String>,
    pub title: String,
    pub updated: Option<String>,
    pub actions: Vec<LinkAction>,
    pub body: Option<DetailBody>,
}
