use super::aggregate::PolicyCategory;
use crate::shared::branding::{first_label, EmptyStatesConfig, HeroConfig, SearchConfig};
use crate::shared::serde_utils::lenient;
use serde::Deserialize;

/// Брендинг страницы политик (branding/policies.json)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PolicyBranding {
    #[serde(deserialize_with = "lenient")]
    pub hero: HeroConfig,
    #[serde(deserialize_with = "lenient")]
    pub tabs: PolicyTabs,
    #[serde(deserialize_with = "lenient")]
    pub search: SearchConfig,
    #[serde(deserialize_with = "lenient")]
    pub list: PolicyListConfig,
    #[serde(deserialize_with = "lenient")]
    pub details: PolicyDetailsConfig,
    #[serde(deserialize_with = "lenient")]
    pub sections: PolicySectionsConfig,
    #[serde(deserialize_with = "lenient")]
    pub empty_states: EmptyStatesConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PolicyTabs {
    #[serde(deserialize_with = "lenient")]
    pub spaces_resources: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub students_individuals: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PolicyListConfig {
    #[serde(deserialize_with = "lenient")]
    pub heading: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub empty: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PolicyDetailsConfig {
    #[serde(deserialize_with = "lenient")]
    pub heading_label: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub intro_message: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub last_updated_label: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub download_label: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub print_label: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub no_sections: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PolicySectionsConfig {
    #[serde(deserialize_with = "lenient")]
    pub spaces_resources_intro_title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub spaces_resources_intro_body: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub students_individuals_intro_title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub students_individuals_intro_body: Option<String>,
}

impl PolicyBranding {
    pub fn tab_label(&self, category: PolicyCategory) -> String {
        match category {
            PolicyCategory::SpacesResources => {
                first_label(&[self.tabs.spaces_resources.as_deref()], "Spaces & resources")
            }
            PolicyCategory::StudentsIndividuals => first_label(
                &[self.tabs.students_individuals.as_deref()],
                "Students & individuals",
            ),
        }
    }

    /// Вводный блок вкладки: (title, body). Без заголовка берётся вторая строка hero.
    pub fn category_intro(&self, category: Option<PolicyCategory>) -> (String, String) {
        let (title, body) = match category {
            Some(PolicyCategory::SpacesResources) => (
                &self.sections.spaces_resources_intro_title,
                &self.sections.spaces_resources_intro_body,
            ),
            Some(PolicyCategory::StudentsIndividuals) => (
                &self.sections.students_individuals_intro_title,
                &self.sections.students_individuals_intro_body,
            ),
            _ => (&None, &None),
        };
        let title = first_label(&[title.as_deref()], "");
        let body = first_label(&[body.as_deref()], "");

        match self.hero.second_line() {
            Some(line) if title.is_empty() => (String::new(), line.to_string()),
            _ => (title, body),
        }
    }

    pub fn intro_message(&self) -> String {
        first_label(
            &[self.details.intro_message.as_deref()],
            "Select a policy to see its details.",
        )
    }

    pub fn last_updated(&self, date: &str) -> String {
        let label = first_label(&[self.details.last_updated_label.as_deref()], "Last updated");
        format!("{}: {}", label, date)
    }

    pub fn download_label(&self) -> String {
        first_label(&[self.details.download_label.as_deref()], "Download PDF")
    }

    pub fn print_label(&self) -> String {
        first_label(&[self.details.print_label.as_deref()], "Open print-friendly view")
    }

    pub fn no_sections_message(&self) -> String {
        first_label(
            &[self.details.no_sections.as_deref()],
            "This policy does not have any sections configured yet.",
        )
    }

    pub fn empty_message(&self) -> String {
        first_label(
            &[self.empty_states.no_match.as_deref(), self.list.empty.as_deref()],
            "No policies matched your filters.",
        )
    }
}
