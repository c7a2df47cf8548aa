use crate::shared::error::CatalogError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Неизменяемая коллекция элементов страницы.
///
/// Заполняется один раз за загрузку страницы и заменяется только целиком.
#[derive(Debug)]
pub struct ContentStore<T> {
    items: Arc<Vec<T>>,
    loaded: bool,
}

impl<T> Clone for ContentStore<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            loaded: self.loaded,
        }
    }
}

impl<T> Default for ContentStore<T> {
    fn default() -> Self {
        Self::pending()
    }
}

impl<T> ContentStore<T> {
    /// Данные ещё не пришли
    pub fn pending() -> Self {
        Self {
            items: Arc::new(Vec::new()),
            loaded: false,
        }
    }

    pub fn loaded(items: Vec<T>) -> Self {
        Self {
            items: Arc::new(items),
            loaded: true,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
}

/// Разобрать ответ вида `{ "<field>": [ ... ] }`.
///
/// Поле должно быть массивом, иначе весь ответ считается испорченным.
/// Каждый элемент разбирается отдельно: битый элемент пропускается,
/// остальные остаются.
pub fn parse_collection<T: DeserializeOwned>(
    payload: &str,
    field: &str,
) -> Result<Vec<T>, CatalogError> {
    let root: Value =
        serde_json::from_str(payload).map_err(|e| CatalogError::malformed(field, e))?;
    collection_from_value(root, field)
}

pub fn collection_from_value<T: DeserializeOwned>(
    root: Value,
    field: &str,
) -> Result<Vec<T>, CatalogError> {
    let raw = match root {
        Value::Object(mut map) => match map.remove(field) {
            Some(Value::Array(raw)) => raw,
            Some(_) => return Err(CatalogError::malformed(field, "not an array")),
            None => return Err(CatalogError::malformed(field, "missing")),
        },
        _ => return Err(CatalogError::malformed(field, "payload is not an object")),
    };

    let total = raw.len();
    let items: Vec<T> = raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<T>(value) {
            Ok(item) => Some(item),
            Err(e) => {
                log::debug!("skipping {}[{}]: {}", field, index, e);
                None
            }
        })
        .collect();

    if items.len() < total {
        log::debug!("{}: kept {} of {} entries", field, items.len(), total);
    }
    Ok(items)
}

/// Граница хранилища: любая ошибка превращается в пустую коллекцию.
pub fn load_or_empty<T>(result: Result<Vec<T>, CatalogError>) -> ContentStore<T> {
    match result {
        Ok(items) => ContentStore::loaded(items),
        Err(e) => {
            log::warn!("content unavailable, showing empty catalog: {}", e);
            ContentStore::loaded(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_howto::HowtoItem;
    use serde_json::json;

    #[test]
    fn test_parses_items_field() {
        let payload = json!({
            "items": [
                { "id": "a", "title": "Alpha" },
                { "id": "b", "title": "Beta" }
            ]
        })
        .to_string();
        let items: Vec<HowtoItem> = parse_collection(&payload, "items").unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].title, "Beta");
    }

    #[test]
    fn test_missing_or_non_array_field_is_malformed() {
        let missing = parse_collection::<HowtoItem>(r#"{"other": []}"#, "items");
        assert!(matches!(missing, Err(CatalogError::MalformedPayload { .. })));

        let scalar = parse_collection::<HowtoItem>(r#"{"items": 3}"#, "items");
        assert!(matches!(scalar, Err(CatalogError::MalformedPayload { .. })));

        let garbage = parse_collection::<HowtoItem>("<html>", "items");
        assert!(garbage.is_err());
    }

    #[test]
    fn test_bad_entries_are_dropped_individually() {
        let payload = json!({
            "items": [
                null,
                { "id": "a", "title": "Alpha", "steps": "not a list" },
                { "id": "b", "title": "Beta" }
            ]
        })
        .to_string();
        let items: Vec<HowtoItem> = parse_collection(&payload, "items").unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "b");
    }

    #[test]
    fn test_error_becomes_empty_loaded_store() {
        let store: ContentStore<HowtoItem> =
            load_or_empty(Err(CatalogError::data("data/howto.json", "HTTP 404")));
        assert!(store.is_loaded());
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_pending_store_is_not_loaded() {
        let store: ContentStore<HowtoItem> = ContentStore::pending();
        assert!(!store.is_loaded());
        let cloned = store.clone();
        assert!(cloned.items().is_empty());
    }
}
