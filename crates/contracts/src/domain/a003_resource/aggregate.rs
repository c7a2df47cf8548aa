use crate::domain::common::{CatalogItem, FacetDim};
use crate::shared::serde_utils::null_as_default;
use serde::{Deserialize, Serialize};

/// Как открывается ресурс
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Download,
    /// Всё, кроме "download"
    #[default]
    #[serde(other)]
    Link,
}

/// Ресурс (data/resources.json → resources[])
///
/// `program` хранится строкой: ключи групп берутся из брендинга и не
/// ограничены встроенным списком программ.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Resource {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub description: Option<String>,
    pub program: Option<String>,
    pub category: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub link_type: LinkType,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

impl CatalogItem for Resource {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_title(&self) -> &str {
        &self.name
    }

    /// Без ссылки показывать нечего
    fn is_displayable(&self) -> bool {
        !self.name.is_empty() && !self.url.is_empty()
    }

    fn facet_value(&self, dim: FacetDim) -> Option<&str> {
        match dim {
            FacetDim::Primary => self.program.as_deref(),
            FacetDim::Secondary => None,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.description.as_deref().unwrap_or(""),
            self.program.as_deref().unwrap_or(""),
            self.category.as_deref().unwrap_or(""),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_resource() {
        let resource: Resource = serde_json::from_value(json!({
            "id": "studio-a-plot",
            "name": "Studio A Room & Stage Plot",
            "program": "mpra",
            "category": "roomPlots",
            "linkType": "download",
            "url": "files/studio-a-plot.pdf"
        }))
        .unwrap();
        assert_eq!(resource.link_type, LinkType::Download);
        assert_eq!(resource.description, None);
        assert!(resource.is_displayable());
    }

    #[test]
    fn test_link_type_defaults_to_link() {
        let resource: Resource =
            serde_json::from_value(json!({ "name": "A", "url": "u", "linkType": "external" }))
                .unwrap();
        assert_eq!(resource.link_type, LinkType::Link);

        let resource: Resource =
            serde_json::from_value(json!({ "name": "A", "url": "u", "linkType": null })).unwrap();
        assert_eq!(resource.link_type, LinkType::Link);
    }

    #[test]
    fn test_resource_without_url_is_hidden() {
        let resource: Resource = serde_json::from_value(json!({ "name": "Plot" })).unwrap();
        assert!(!resource.is_displayable());
    }

    #[test]
    fn test_search_covers_category_code() {
        let resource = Resource {
            name: "Plot".to_string(),
            category: Some("roomPlots".to_string()),
            url: "u".to_string(),
            ..Resource::default()
        };
        assert!(resource.search_haystack().contains("roomplots"));
    }
}
