use crate::domain::common::{CatalogItem, FacetDim};
use crate::shared::catalog::DetailSource;
use crate::shared::serde_utils::null_as_default;
use serde::{Deserialize, Serialize};

// ============================================================================
// Enums
// ============================================================================

/// Тип справочного материала, предлагаемый в фильтре.
///
/// В данных категория хранится строкой; неизвестные коды остаются как есть.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HowtoCategory {
    Accounts,
    Troubleshooting,
    Walkthroughs,
    Other,
}

impl HowtoCategory {
    pub fn code(&self) -> &'static str {
        match self {
            HowtoCategory::Accounts => "accounts",
            HowtoCategory::Troubleshooting => "troubleshooting",
            HowtoCategory::Walkthroughs => "walkthroughs",
            HowtoCategory::Other => "other",
        }
    }

    /// Подпись по умолчанию для фильтра и заголовка раздела
    pub fn default_label(&self) -> &'static str {
        match self {
            HowtoCategory::Accounts => "Accounts & access",
            HowtoCategory::Troubleshooting => "Troubleshooting",
            HowtoCategory::Walkthroughs => "Walkthroughs",
            HowtoCategory::Other => "Other / general help",
        }
    }

    pub fn all() -> Vec<HowtoCategory> {
        vec![
            HowtoCategory::Accounts,
            HowtoCategory::Troubleshooting,
            HowtoCategory::Walkthroughs,
            HowtoCategory::Other,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.code() == code)
    }
}

/// Форма подачи материала
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HowtoFormat {
    #[serde(rename = "textOnly")]
    TextOnly,
    #[serde(rename = "htmlEmbed")]
    HtmlEmbed,
    #[serde(rename = "video")]
    Video,
    #[serde(other)]
    Unknown,
}

impl HowtoFormat {
    pub fn code(&self) -> &'static str {
        match self {
            HowtoFormat::TextOnly => "textOnly",
            HowtoFormat::HtmlEmbed => "htmlEmbed",
            HowtoFormat::Video => "video",
            HowtoFormat::Unknown => "unknown",
        }
    }
}

// ============================================================================
// Item
// ============================================================================

/// Справочный материал (data/howto.json → items[])
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HowtoItem {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// Код программы как в файле
    pub program: Option<String>,
    /// Код категории как в файле
    pub category: Option<String>,
    pub summary: Option<String>,
    pub format: Option<HowtoFormat>,
    pub url: Option<String>,
    /// Нумерованные шаги (для textOnly)
    #[serde(deserialize_with = "null_as_default")]
    pub steps: Vec<String>,
    /// Абзацы перед шагами (для textOnly)
    #[serde(deserialize_with = "null_as_default")]
    pub body: Vec<String>,
}

impl CatalogItem for HowtoItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_title(&self) -> &str {
        &self.title
    }

    fn facet_value(&self, dim: FacetDim) -> Option<&str> {
        match dim {
            FacetDim::Primary => self.program.as_deref(),
            FacetDim::Secondary => self.category.as_deref(),
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.summary.as_deref().unwrap_or(""),
            self.program.as_deref().unwrap_or(""),
            self.category.as_deref().unwrap_or(""),
        ]
    }
}

impl DetailSource for HowtoItem {
    fn is_text_only(&self) -> bool {
        self.format == Some(HowtoFormat::TextOnly)
    }

    fn paragraphs(&self) -> &[String] {
        &self.body
    }

    fn steps(&self) -> &[String] {
        &self.steps
    }

    fn frame_url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    fn frame_title(&self) -> &str {
        &self.title
    }
}
