use super::aggregate::{HowtoCategory, HowtoFormat};
use crate::shared::branding::{first_label, EmptyStatesConfig, HeroConfig, SearchConfig};
use crate::shared::serde_utils::{lenient, lenient_map};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Брендинг страницы how-to (branding/howto.json)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HowtoBranding {
    #[serde(deserialize_with = "lenient")]
    pub hero: HeroConfig,
    #[serde(deserialize_with = "lenient")]
    pub search: SearchConfig,
    #[serde(deserialize_with = "lenient")]
    pub filters: HowtoFilters,
    #[serde(deserialize_with = "lenient")]
    pub sections: HowtoSections,
    /// category code → подпись
    #[serde(deserialize_with = "lenient_map")]
    pub categories: BTreeMap<String, String>,
    /// format code → подпись
    #[serde(deserialize_with = "lenient_map")]
    pub item_labels: BTreeMap<String, String>,
    #[serde(deserialize_with = "lenient")]
    pub buttons: HowtoButtons,
    #[serde(deserialize_with = "lenient")]
    pub empty_states: EmptyStatesConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HowtoFilters {
    #[serde(deserialize_with = "lenient")]
    pub program_label: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub program_all: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub category_label: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub category_all: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HowtoSections {
    #[serde(deserialize_with = "lenient")]
    pub accounts_title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub troubleshooting_title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub walkthroughs_title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub other_title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub empty: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HowtoButtons {
    #[serde(deserialize_with = "lenient")]
    pub watch_video: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub view_html: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub open_guide: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub hide_guide: Option<String>,
}

impl HowtoBranding {
    /// Подпись категории только из конфигурации (для строки мета).
    /// Код берётся как в данных, включая неизвестные.
    pub fn configured_category(&self, code: &str) -> Option<&str> {
        self.categories
            .get(code)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Подпись категории для фильтра: конфигурация или встроенная
    pub fn category_label(&self, category: HowtoCategory) -> String {
        first_label(
            &[self.configured_category(category.code())],
            category.default_label(),
        )
    }

    /// Заголовок раздела для выбранной категории
    pub fn section_title(&self, category: HowtoCategory) -> String {
        let specific = match category {
            HowtoCategory::Accounts => &self.sections.accounts_title,
            HowtoCategory::Troubleshooting => &self.sections.troubleshooting_title,
            HowtoCategory::Walkthroughs => &self.sections.walkthroughs_title,
            HowtoCategory::Other => &self.sections.other_title,
        };
        first_label(
            &[specific.as_deref(), self.configured_category(category.code())],
            category.default_label(),
        )
    }

    pub fn format_label(&self, format: HowtoFormat) -> Option<&str> {
        self.item_labels
            .get(format.code())
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Подпись кнопки раскрытия в свёрнутом состоянии
    pub fn open_label(&self, format: Option<HowtoFormat>) -> String {
        match format {
            Some(HowtoFormat::Video) => first_label(&[self.buttons.watch_video.as_deref()], "Watch video"),
            Some(HowtoFormat::HtmlEmbed) => first_label(&[self.buttons.view_html.as_deref()], "View details"),
            _ => first_label(&[self.buttons.open_guide.as_deref()], "Open guide"),
        }
    }

    pub fn hide_label(&self) -> String {
        first_label(&[self.buttons.hide_guide.as_deref()], "Hide guide")
    }

    pub fn empty_message(&self) -> String {
        first_label(
            &[self.empty_states.no_match.as_deref(), self.sections.empty.as_deref()],
            "No help items matched your filters.",
        )
    }
}
