use std::collections::HashSet;

/// Политика детального показа, выбирается архетипом страницы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerPolicy {
    /// Один выбранный элемент и панель деталей (политики)
    SingleDetail,
    /// Каждая карточка раскрывается сама по себе (how-to)
    IndependentExpand,
    /// Без детального показа (ресурсы)
    None,
}

/// Выбранный элемент на странице с одной панелью деталей
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub selected_id: Option<String>,
}

impl SelectionState {
    pub fn select(&mut self, id: &str) {
        self.selected_id = Some(id.to_string());
    }

    /// Сброс при смене фасета/вкладки
    pub fn clear(&mut self) {
        self.selected_id = None;
    }

    /// Пересчёт после изменения выдачи: если выбранного нет в выдаче
    /// (или он сброшен), выбирается первый элемент; при пустой выдаче выбора нет.
    pub fn reconcile(&mut self, view_ids: &[&str]) {
        let still_visible = self
            .selected_id
            .as_deref()
            .is_some_and(|selected| view_ids.contains(&selected));
        if !still_visible {
            self.selected_id = view_ids.first().map(|id| id.to_string());
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_id.as_deref() == Some(id)
    }
}

/// Флаги раскрытия карточек. Отсутствие id означает "свёрнуто".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: HashSet<String>,
}

impl ExpansionState {
    pub fn toggle(&mut self, id: &str) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_string());
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Скрытые фильтром карточки теряют флаг: при повторном появлении
    /// они снова свёрнуты.
    pub fn retain_visible(&mut self, view_ids: &[&str]) {
        self.expanded.retain(|id| view_ids.contains(&id.as_str()));
    }
}

/// Состояние трекера в зависимости от политики страницы
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tracker {
    Selection(SelectionState),
    Expansion(ExpansionState),
    None,
}

impl Tracker {
    pub fn for_policy(policy: TrackerPolicy) -> Self {
        match policy {
            TrackerPolicy::SingleDetail => Tracker::Selection(SelectionState::default()),
            TrackerPolicy::IndependentExpand => Tracker::Expansion(ExpansionState::default()),
            TrackerPolicy::None => Tracker::None,
        }
    }

    /// Согласовать трекер с новой выдачей
    pub fn reconcile(&mut self, view_ids: &[&str]) {
        match self {
            Tracker::Selection(selection) => selection.reconcile(view_ids),
            Tracker::Expansion(expansion) => expansion.retain_visible(view_ids),
            Tracker::None => {}
        }
    }

    pub fn selected_id(&self) -> Option<&str> {
        match self {
            Tracker::Selection(selection) => selection.selected_id.as_deref(),
            _ => None,
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        match self {
            Tracker::Expansion(expansion) => expansion.is_expanded(id),
            _ => false,
        }
    }
}
