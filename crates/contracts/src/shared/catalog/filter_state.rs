use crate::domain::common::FacetDim;

/// Код значения "без ограничения"
pub const ALL: &str = "all";

/// Выбранное значение одного фасета
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Facet {
    #[default]
    All,
    Only(String),
}

impl Facet {
    /// Парсинг из кода кнопки фильтра ("all" или значение)
    pub fn from_code(code: &str) -> Self {
        if code == ALL {
            Facet::All
        } else {
            Facet::Only(code.to_string())
        }
    }

    pub fn only(code: &str) -> Self {
        Facet::Only(code.to_string())
    }

    pub fn code(&self) -> &str {
        match self {
            Facet::All => ALL,
            Facet::Only(value) => value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Facet::All)
    }

    /// Точное сравнение с полем элемента; "all" пропускает всё
    pub fn accepts(&self, value: Option<&str>) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(expected) => value == Some(expected.as_str()),
        }
    }
}

/// Состояние фильтров страницы. Меняется только действиями пользователя.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub search: String,
    pub primary: Facet,
    pub secondary: Facet,
}

impl FilterState {
    pub fn with_primary(primary: Facet) -> Self {
        Self {
            primary,
            ..Self::default()
        }
    }

    pub fn facet(&self, dim: FacetDim) -> &Facet {
        match dim {
            FacetDim::Primary => &self.primary,
            FacetDim::Secondary => &self.secondary,
        }
    }

    pub fn set_facet(&mut self, dim: FacetDim, facet: Facet) {
        match dim {
            FacetDim::Primary => self.primary = facet,
            FacetDim::Secondary => self.secondary = facet,
        }
    }

    /// Поисковый запрос после trim и приведения к нижнему регистру
    pub fn search_term(&self) -> String {
        self.search.trim().to_lowercase()
    }
}
