//! Общие типы каталожных страниц: элементы контента, конфигурация брендинга,
//! движок фильтрации и рендер в модель представления.
//!
//! Крейт не зависит от браузера и собирается как для wasm, так и нативно,
//! поэтому все поведенческие тесты живут здесь.

pub mod domain;
pub mod enums;
pub mod shared;
