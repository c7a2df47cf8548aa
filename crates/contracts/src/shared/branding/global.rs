use crate::enums::program::Program;
use crate::shared::serde_utils::{lenient, lenient_map};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Общий брендинг сайта (branding/global.json).
///
/// Из него каталогу нужны только названия программ; остальное относится
/// к оболочке страницы.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GlobalBranding {
    #[serde(deserialize_with = "lenient")]
    pub site_title: Option<String>,
    #[serde(deserialize_with = "lenient_map")]
    pub programs: BTreeMap<String, String>,
}

impl GlobalBranding {
    /// Полное название программы по коду из данных: из конфигурации,
    /// иначе встроенное, иначе сам код
    pub fn program_label(&self, code: Option<&str>) -> String {
        let code = code.unwrap_or_default();
        if let Some(label) = self.programs.get(code).filter(|label| !label.is_empty()) {
            return label.clone();
        }
        match Program::from_code(code) {
            Some(program) => program.display_name().to_string(),
            None if code.is_empty() => Program::Other.display_name().to_string(),
            None => code.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_label_prefers_config() {
        let global: GlobalBranding = serde_json::from_str(
            r#"{"programs": {"mpra": "MPRA Program", "podcasting": "Podcast Lab"}}"#,
        )
        .unwrap();
        assert_eq!(global.program_label(Some("mpra")), "MPRA Program");
        assert_eq!(global.program_label(Some("da")), "Digital Arts");
        assert_eq!(global.program_label(Some("podcasting")), "Podcast Lab");
        assert_eq!(global.program_label(None), "Other");
    }

    #[test]
    fn test_unknown_program_code_is_shown_as_is() {
        let global = GlobalBranding::default();
        assert_eq!(global.program_label(Some("workshops")), "workshops");
        assert_eq!(global.program_label(Some("")), "Other");
    }

    #[test]
    fn test_bad_site_title_keeps_program_names() {
        let global: GlobalBranding =
            serde_json::from_str(r#"{"siteTitle": ["x"], "programs": {"da": "DA Program"}}"#)
                .unwrap();
        assert_eq!(global.site_title, None);
        assert_eq!(global.program_label(Some("da")), "DA Program");
    }
}
