//! Помощники десериализации для "грязного" JSON, который правится руками.

use serde::de::{DeserializeOwned, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

/// `null` превращается в значение по умолчанию вместо ошибки.
///
/// Используется вместе с `#[serde(default)]`, чтобы и отсутствующее поле,
/// и явный `null` давали пустую строку / пустой список.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Значение неподходящего типа превращается в значение по умолчанию.
///
/// Для полей брендинга: ошибка в одном ключе не должна отменять остальные.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_else(|e| {
        log::debug!("ignoring branding value: {}", e);
        T::default()
    }))
}

/// Объект строка → значение; записи неподходящего типа пропускаются поштучно.
pub fn lenient_map<'de, D, V>(deserializer: D) -> Result<BTreeMap<String, V>, D::Error>
where
    D: Deserializer<'de>,
    V: DeserializeOwned,
{
    let entries = match Value::deserialize(deserializer)? {
        Value::Object(entries) => entries,
        _ => return Ok(BTreeMap::new()),
    };
    Ok(entries
        .into_iter()
        .filter_map(|(key, value)| V::deserialize(value).ok().map(|v| (key, v)))
        .collect())
}

/// JSON-объект как список пар в порядке следования ключей в файле.
///
/// `null` и записи неподходящего типа пропускаются; не-объект даёт пустой список.
pub fn ordered_entries<'de, D, V>(deserializer: D) -> Result<Vec<(String, V)>, D::Error>
where
    D: Deserializer<'de>,
    V: DeserializeOwned,
{
    struct EntriesVisitor<V>(PhantomData<V>);

    impl<'de, V: DeserializeOwned> Visitor<'de> for EntriesVisitor<V> {
        type Value = Vec<(String, V)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an object")
        }

        fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_bool<E: serde::de::Error>(self, _: bool) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_i64<E: serde::de::Error>(self, _: i64) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_u64<E: serde::de::Error>(self, _: u64) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_f64<E: serde::de::Error>(self, _: f64) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_str<E: serde::de::Error>(self, _: &str) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            while seq.next_element::<IgnoredAny>()?.is_some() {}
            Ok(Vec::new())
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::new();
            while let Some((key, value)) = map.next_entry::<String, Value>()? {
                match V::deserialize(value) {
                    Ok(value) => entries.push((key, value)),
                    Err(e) => log::debug!("skipping entry {:?}: {}", key, e),
                }
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_any(EntriesVisitor(PhantomData))
}

/// Пустая строка считается отсутствующим значением
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize, Default)]
    struct Defaults {
        #[serde(default, deserialize_with = "null_as_default")]
        list: Vec<String>,
        #[serde(default, deserialize_with = "null_as_default")]
        name: String,
    }

    #[test]
    fn test_null_and_missing_become_default() {
        let p: Defaults = serde_json::from_str(r#"{"list": null, "name": null}"#).unwrap();
        assert!(p.list.is_empty());
        assert_eq!(p.name, "");

        let p: Defaults = serde_json::from_str("{}").unwrap();
        assert!(p.list.is_empty());
    }

    #[derive(Deserialize, Default, Debug, PartialEq)]
    #[serde(default)]
    struct Labels {
        #[serde(deserialize_with = "lenient")]
        title: Option<String>,
        #[serde(deserialize_with = "lenient")]
        lines: Vec<String>,
        #[serde(deserialize_with = "lenient_map")]
        names: BTreeMap<String, String>,
    }

    #[test]
    fn test_lenient_fields_fall_back_one_by_one() {
        let l: Labels = serde_json::from_str(
            r#"{"title": "Help", "lines": "one line", "names": {"a": "A", "b": 2, "c": null}}"#,
        )
        .unwrap();
        assert_eq!(l.title.as_deref(), Some("Help"));
        assert!(l.lines.is_empty());
        assert_eq!(l.names.len(), 1);
        assert_eq!(l.names["a"], "A");

        let l: Labels = serde_json::from_str(r#"{"title": 7, "lines": ["x"], "names": []}"#).unwrap();
        assert_eq!(l.title, None);
        assert_eq!(l.lines, vec!["x"]);
        assert!(l.names.is_empty());
    }

    #[derive(Deserialize)]
    struct Ordered {
        #[serde(default, deserialize_with = "ordered_entries")]
        groups: Vec<(String, u32)>,
    }

    #[test]
    fn test_ordered_entries_keep_file_order() {
        let o: Ordered =
            serde_json::from_str(r#"{"groups": {"zeta": 1, "alpha": 2, "skip": null, "mid": 3}}"#)
                .unwrap();
        let keys: Vec<&str> = o.groups.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);

        let o: Ordered = serde_json::from_str(r#"{"groups": null}"#).unwrap();
        assert!(o.groups.is_empty());
    }

    #[test]
    fn test_ordered_entries_tolerate_wrong_types() {
        let o: Ordered =
            serde_json::from_str(r#"{"groups": {"a": 1, "b": "two", "c": 3}}"#).unwrap();
        let keys: Vec<&str> = o.groups.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["a", "c"]);

        for payload in [r#"{"groups": "mpra"}"#, r#"{"groups": [1, 2]}"#, r#"{"groups": true}"#] {
            let o: Ordered = serde_json::from_str(payload).unwrap();
            assert!(o.groups.is_empty());
        }
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(&Some(String::new())), None);
        assert_eq!(non_empty(&Some("x".into())), Some("x"));
        assert_eq!(non_empty(&None), None);
    }
}
