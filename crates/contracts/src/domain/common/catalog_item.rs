/// Измерение фильтрации (фасет). Страница использует от нуля до двух.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetDim {
    /// Программа на how-to и ресурсах, вкладка на политиках
    Primary,
    /// Категория на how-to
    Secondary,
}

/// Элемент каталога, который умеет фильтроваться, сортироваться и выбираться.
pub trait CatalogItem {
    /// Идентификатор элемента. Уникальность не проверяется.
    fn id(&self) -> &str;

    /// Основное отображаемое поле (title / name), по нему идёт сортировка
    fn display_title(&self) -> &str;

    /// Минимальное условие попадания в выдачу
    fn is_displayable(&self) -> bool {
        !self.display_title().is_empty()
    }

    /// Значение поля, соответствующего фасету. `None` не совпадает ни с чем,
    /// кроме "all".
    fn facet_value(&self, dim: FacetDim) -> Option<&str>;

    /// Поля, по которым идёт поиск, в фиксированном порядке
    fn search_fields(&self) -> Vec<&str>;

    /// Строка поиска: поля через один пробел, в нижнем регистре
    fn search_haystack(&self) -> String {
        self.search_fields().join(" ").to_lowercase()
    }
}
