use crate::domain::common::{CatalogItem, FacetDim};
use crate::shared::serde_utils::null_as_default;
use serde::{Deserialize, Serialize};

/// Вкладка страницы политик
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyCategory {
    SpacesResources,
    StudentsIndividuals,
}

impl PolicyCategory {
    pub fn code(&self) -> &'static str {
        match self {
            PolicyCategory::SpacesResources => "spacesResources",
            PolicyCategory::StudentsIndividuals => "studentsIndividuals",
        }
    }

    /// Вкладки в порядке показа
    pub fn tabs() -> Vec<PolicyCategory> {
        vec![
            PolicyCategory::SpacesResources,
            PolicyCategory::StudentsIndividuals,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "spacesResources" => Some(PolicyCategory::SpacesResources),
            "studentsIndividuals" => Some(PolicyCategory::StudentsIndividuals),
            _ => None,
        }
    }
}

/// Раздел политики: заголовок, пункты списка и/или абзацы
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicySection {
    pub title: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub body: Vec<String>,
}

/// Политика (data/policies.json → policies[])
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Policy {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// Код вкладки как в файле
    pub category: Option<String>,
    pub last_updated: Option<String>,
    pub download_url: Option<String>,
    pub print_url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub sections: Vec<PolicySection>,
}

impl CatalogItem for Policy {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_title(&self) -> &str {
        &self.title
    }

    fn facet_value(&self, dim: FacetDim) -> Option<&str> {
        match dim {
            FacetDim::Primary => self.category.as_deref(),
            FacetDim::Secondary => None,
        }
    }

    /// Заголовок, дата и весь текст разделов
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.title.as_str(),
            self.last_updated.as_deref().unwrap_or(""),
        ];
        for section in &self.sections {
            if let Some(title) = section.title.as_deref().filter(|t| !t.is_empty()) {
                fields.push(title);
            }
            fields.extend(section.items.iter().map(String::as_str));
            fields.extend(section.body.iter().map(String::as_str));
        }
        fields
    }
}
