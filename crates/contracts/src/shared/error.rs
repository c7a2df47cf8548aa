use thiserror::Error;

/// Ошибки загрузки контента и брендинга.
///
/// Ни одна из них не фатальна для страницы: на границе загрузки каждая
/// превращается в значение по умолчанию и только логируется.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Файл брендинга недоступен или не разбирается
    #[error("branding config {url} unavailable: {reason}")]
    ConfigFetch { url: String, reason: String },

    /// Файл данных недоступен (сеть, HTTP статус)
    #[error("content data {url} unavailable: {reason}")]
    DataFetch { url: String, reason: String },

    /// Ответ получен, но нужное поле отсутствует или не является массивом
    #[error("malformed payload, field `{field}`: {reason}")]
    MalformedPayload { field: String, reason: String },
}

impl CatalogError {
    pub fn config(url: &str, reason: impl ToString) -> Self {
        CatalogError::ConfigFetch {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn data(url: &str, reason: impl ToString) -> Self {
        CatalogError::DataFetch {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn malformed(field: &str, reason: impl ToString) -> Self {
        CatalogError::MalformedPayload {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }
}
