//! Загрузка статических JSON файлов каталога.
//!
//! Все запросы идут с `cache: no-cache`, чтобы правки JSON на сервере
//! были видны без сброса кэша браузера.

use contracts::shared::branding::{branding_or_default, parse_branding};
use contracts::shared::catalog::content_store::{collection_from_value, load_or_empty};
use contracts::shared::catalog::ContentStore;
use contracts::shared::config::resolve_asset;
use contracts::shared::error::CatalogError;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use web_sys::RequestCache;

/// Базовый адрес документа (с учётом `<base href>`)
///
/// # Returns
/// - URL like "https://host/repo/how-to"
/// - `None` if window or document is not available
pub fn document_base() -> Option<String> {
    web_sys::window()?.document()?.base_uri().ok().flatten()
}

/// Полный адрес статического файла относительно текущей страницы
///
/// # Example
/// ```rust,no_run
/// # use frontend::shared::api_utils::asset_url;
/// let url = asset_url("data/howto.json");
/// ```
pub fn asset_url(path: &str) -> String {
    match document_base() {
        Some(base) => resolve_asset(&base, path),
        None => path.to_string(),
    }
}

/// GET без кэша; ошибка сети или статус не 2xx → `Err(reason)`
async fn fetch_text(url: &str) -> Result<String, String> {
    let response = Request::get(url)
        .cache(RequestCache::NoCache)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))
}

/// Загрузить коллекцию `{ "<field>": [...] }`
pub async fn fetch_collection<T: DeserializeOwned>(
    url: &str,
    field: &str,
) -> Result<Vec<T>, CatalogError> {
    let text = fetch_text(url)
        .await
        .map_err(|reason| CatalogError::data(url, reason))?;
    let root: serde_json::Value =
        serde_json::from_str(&text).map_err(|e| CatalogError::malformed(field, e))?;
    collection_from_value(root, field)
}

/// Загрузить файл брендинга
pub async fn fetch_branding<B: DeserializeOwned>(url: &str) -> Result<B, CatalogError> {
    let text = fetch_text(url)
        .await
        .map_err(|reason| CatalogError::config(url, reason))?;
    parse_branding(&text, url)
}

/// Граница хранилища: ошибка → пустой каталог
pub async fn load_store<T: DeserializeOwned>(url: &str, field: &str) -> ContentStore<T> {
    load_or_empty(fetch_collection(url, field).await)
}

/// Граница брендинга: ошибка → встроенные подписи
pub async fn load_branding<B: DeserializeOwned + Default>(url: &str) -> B {
    branding_or_default(fetch_branding(url).await)
}
