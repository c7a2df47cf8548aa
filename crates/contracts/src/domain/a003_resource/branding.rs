use super::aggregate::LinkType;
use crate::enums::program::Program;
use crate::shared::branding::{first_label, EmptyStatesConfig, HeroConfig, SearchConfig};
use crate::shared::serde_utils::{lenient, lenient_map, non_empty, ordered_entries};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Группа программ в браузере слева
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProgramGroup {
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
}

/// Брендинг страницы ресурсов (branding/resources.json)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResourceBranding {
    #[serde(deserialize_with = "lenient")]
    pub hero: HeroConfig,
    #[serde(deserialize_with = "lenient")]
    pub search: SearchConfig,
    #[serde(deserialize_with = "lenient")]
    pub filters: ResourceFilters,
    #[serde(deserialize_with = "lenient")]
    pub sections: ResourceSections,
    #[serde(deserialize_with = "lenient")]
    pub sidebar: ResourceSidebar,
    /// Порядок групп как в файле
    #[serde(deserialize_with = "ordered_entries")]
    pub program_groups: Vec<(String, ProgramGroup)>,
    /// category code → подпись
    #[serde(deserialize_with = "lenient_map")]
    pub resource_type_labels: BTreeMap<String, String>,
    #[serde(deserialize_with = "lenient")]
    pub buttons: ResourceButtons,
    #[serde(deserialize_with = "lenient")]
    pub empty_states: EmptyStatesConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResourceFilters {
    #[serde(deserialize_with = "lenient")]
    pub program_label: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub program_all: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResourceSections {
    #[serde(deserialize_with = "lenient")]
    pub by_program_title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub empty: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResourceSidebar {
    #[serde(deserialize_with = "lenient")]
    pub kicker: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResourceButtons {
    #[serde(deserialize_with = "lenient")]
    pub download: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub link: Option<String>,
}

impl ResourceBranding {
    pub fn group(&self, key: &str) -> Option<&ProgramGroup> {
        self.program_groups
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, group)| group)
    }

    fn group_title(&self, key: &str) -> Option<&str> {
        self.group(key).and_then(|g| non_empty(&g.title))
    }

    /// Строки браузера программ (без "all"): группы из конфигурации,
    /// а если их нет, встроенный список
    pub fn browser_entries(&self) -> Vec<(String, String)> {
        if self.program_groups.is_empty() {
            return Program::listed()
                .into_iter()
                .map(|p| (p.code().to_string(), p.short_name().to_string()))
                .collect();
        }
        self.program_groups
            .iter()
            .map(|(key, group)| {
                let label = non_empty(&group.title).unwrap_or(key.as_str());
                (key.clone(), label.to_string())
            })
            .collect()
    }

    /// Плашка программы на карточке
    pub fn program_pill(&self, program: Option<&str>) -> String {
        let Some(code) = program.filter(|c| !c.is_empty()) else {
            return Program::Other.short_name().to_string();
        };
        if let Some(title) = self.group_title(code) {
            return title.to_string();
        }
        match Program::from_code(code) {
            Some(program) => program.short_name().to_string(),
            None => code.to_string(),
        }
    }

    /// Заголовок и описание над списком для выбранной программы
    pub fn program_heading(&self, program: Option<&str>) -> (String, String) {
        match program {
            None => (
                first_label(&[self.sections.by_program_title.as_deref()], "All resources"),
                self.hero.second_line().unwrap_or_default().to_string(),
            ),
            Some(code) => {
                let group = self.group(code);
                let title = group
                    .and_then(|g| non_empty(&g.title))
                    .unwrap_or(code)
                    .to_string();
                let description = group
                    .and_then(|g| non_empty(&g.description))
                    .unwrap_or_default()
                    .to_string();
                (title, description)
            }
        }
    }

    pub fn type_label(&self, category: Option<&str>) -> Option<String> {
        category
            .and_then(|c| self.resource_type_labels.get(c))
            .filter(|label| !label.is_empty())
            .cloned()
    }

    pub fn link_label(&self, link_type: LinkType) -> String {
        match link_type {
            LinkType::Download => first_label(&[self.buttons.download.as_deref()], "Download"),
            LinkType::Link => first_label(&[self.buttons.link.as_deref()], "Link to resource"),
        }
    }

    pub fn empty_message(&self) -> String {
        first_label(
            &[self.empty_states.no_match.as_deref(), self.sections.empty.as_deref()],
            "No resources matched your filters.",
        )
    }
}
