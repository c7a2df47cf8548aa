//! Конфигурация брендинга: необязательные подписи поверх встроенных строк.
//!
//! Любое поле может отсутствовать; отсутствие никогда не мешает рендеру.

pub mod global;

pub use global::GlobalBranding;

use crate::shared::error::CatalogError;
use crate::shared::serde_utils::lenient;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Первый непустой вариант, иначе встроенная строка
pub fn first_label(candidates: &[Option<&str>], fallback: &str) -> String {
    candidates
        .iter()
        .flatten()
        .find(|s| !s.is_empty())
        .map(|s| s.to_string())
        .unwrap_or_else(|| fallback.to_string())
}

/// Непустое значение или `None`
pub fn optional_label(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|s| !s.is_empty()).map(str::to_string)
}

/// Разобрать файл брендинга
pub fn parse_branding<B: DeserializeOwned>(payload: &str, url: &str) -> Result<B, CatalogError> {
    serde_json::from_str(payload).map_err(|e| CatalogError::config(url, e))
}

/// Граница брендинга: при ошибке используются встроенные подписи
pub fn branding_or_default<B: Default>(result: Result<B, CatalogError>) -> B {
    result.unwrap_or_else(|e| {
        log::warn!("using built-in labels: {}", e);
        B::default()
    })
}

/// Блок hero: заголовок страницы и строки описания
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    #[serde(deserialize_with = "lenient")]
    pub heading: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub body: Vec<String>,
}

impl HeroConfig {
    pub fn heading_or(&self, fallback: &str) -> String {
        first_label(&[self.heading.as_deref()], fallback)
    }

    /// Подзаголовок страницы: первая строка body
    pub fn subtitle(&self) -> String {
        self.body.first().cloned().unwrap_or_default()
    }

    /// Вторая строка body, используется как вводный текст раздела
    pub fn second_line(&self) -> Option<&str> {
        self.body.get(1).map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    #[serde(deserialize_with = "lenient")]
    pub label: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub placeholder: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmptyStatesConfig {
    #[serde(deserialize_with = "lenient")]
    pub no_match: Option<String>,
}
