use super::aggregate::{Policy, PolicyCategory};
use super::branding::PolicyBranding;
use crate::domain::common::FacetDim;
use crate::shared::branding::{first_label, optional_label};
use crate::shared::catalog::{
    CatalogPage, ChoiceModel, ControlsModel, DetailBody, DetailPane, DetailSection, Facet,
    FacetGroup, FacetStyle, FilterState, HeaderModel, Labels, LinkAction, ListModel, SearchModel,
    Tracker, TrackerPolicy,
};

/// Страница политик: вкладки вместо "all", один выбранный элемент и
/// панель деталей справа.
pub struct PolicyPage;

impl CatalogPage for PolicyPage {
    type Item = Policy;
    type Branding = PolicyBranding;

    const DATA_FILE: &'static str = "policies.json";
    const BRANDING_FILE: &'static str = "policies.json";
    const COLLECTION_FIELD: &'static str = "policies";
    const TRACKER: TrackerPolicy = TrackerPolicy::SingleDetail;

    fn initial_filter() -> FilterState {
        FilterState::with_primary(Facet::only(PolicyCategory::SpacesResources.code()))
    }

    fn header(filter: &FilterState, labels: &Labels<PolicyBranding>) -> HeaderModel {
        let cfg = &labels.page;
        let category = match &filter.primary {
            Facet::All => None,
            Facet::Only(code) => PolicyCategory::from_code(code),
        };
        let (intro_title, intro_body) = cfg.category_intro(category);

        HeaderModel {
            title: cfg.hero.heading_or("Policies"),
            subtitle: cfg.hero.subtitle(),
            intro_title,
            intro_body,
        }
    }

    fn controls(filter: &FilterState, labels: &Labels<PolicyBranding>) -> ControlsModel {
        let cfg = &labels.page;
        let tabs = PolicyCategory::tabs()
            .into_iter()
            .map(|c| (Facet::only(c.code()), cfg.tab_label(c)))
            .collect();

        ControlsModel {
            kicker: None,
            note: None,
            search: SearchModel {
                label: optional_label(&cfg.search.label),
                placeholder: first_label(&[cfg.search.placeholder.as_deref()], "Search..."),
                value: filter.search.clone(),
            },
            facets: vec![FacetGroup::build(
                FacetDim::Primary,
                FacetStyle::Tabs,
                None,
                &filter.primary,
                tabs,
            )],
            list_heading: optional_label(&cfg.list.heading),
        }
    }

    fn list(view: &[&Policy], tracker: &Tracker, _labels: &Labels<PolicyBranding>) -> ListModel {
        let selected = tracker.selected_id();
        ListModel::Choices(
            view.iter()
                .map(|policy| ChoiceModel {
                    id: policy.id.clone(),
                    title: policy.title.clone(),
                    active: selected == Some(policy.id.as_str()),
                })
                .collect(),
        )
    }

    fn empty_message(labels: &Labels<PolicyBranding>) -> String {
        labels.page.empty_message()
    }

    fn detail(selected: Option<&Policy>, labels: &Labels<PolicyBranding>) -> Option<DetailPane> {
        let cfg = &labels.page;
        let heading_label = optional_label(&cfg.details.heading_label);

        let Some(policy) = selected else {
            return Some(DetailPane {
                heading_label,
                intro: Some(cfg.intro_message()),
                ..DetailPane::default()
            });
        };

        let mut actions = Vec::new();
        if let Some(href) = optional_label(&policy.download_url) {
            actions.push(LinkAction {
                href,
                label: cfg.download_label(),
                download: true,
                primary: false,
            });
        }
        if let Some(href) = optional_label(&policy.print_url) {
            actions.push(LinkAction {
                href,
                label: cfg.print_label(),
                download: false,
                primary: true,
            });
        }

        let body = if policy.sections.is_empty() {
            DetailBody::Empty(cfg.no_sections_message())
        } else {
            DetailBody::Sections(
                policy
                    .sections
                    .iter()
                    .map(|section| DetailSection {
                        title: optional_label(&section.title),
                        bullets: section.items.clone(),
                        paragraphs: section.body.clone(),
                    })
                    .collect(),
            )
        };

        Some(DetailPane {
            heading_label,
            intro: None,
            title: policy.title.clone(),
            updated: optional_label(&policy.last_updated).map(|date| cfg.last_updated(&date)),
            actions,
            body: Some(body),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog::content_store::parse_collection;
    use crate::shared::catalog::{
        reduce, render, CatalogAction, ContentStore, PageState, RecordingBinding,
    };
    use serde_json::json;

    fn fixture() -> Vec<Policy> {
        let payload = json!({
            "policies": [
                {
                    "id": "studio-general",
                    "title": "Studio & Lab Access and Booking",
                    "category": "spacesResources",
                    "lastUpdated": "2024-08-01",
                    "downloadUrl": "files/studio-policies.pdf",
                    "printUrl": "print/policy-studio-general.html",
                    "sections": [
                        { "title": "General Policies", "items": ["Only enrolled students may book."] },
                        { "title": "Maintenance and Cleanup", "body": ["No trash should be left in the studio."] }
                    ]
                },
                {
                    "id": "equipment",
                    "title": "Equipment Checkout",
                    "category": "spacesResources",
                    "sections": []
                },
                {
                    "id": "conduct",
                    "title": "Code of Conduct",
                    "category": "studentsIndividuals",
                    "sections": [{ "items": ["Be kind."] }]
                }
            ]
        })
        .to_string();
        parse_collection(&payload, "policies").unwrap()
    }

    fn loaded() -> PageState<Policy> {
        reduce(
            &PolicyPage::initial_state(),
            CatalogAction::Loaded(ContentStore::loaded(fixture())),
        )
    }

    fn rendered(state: &PageState<Policy>) -> RecordingBinding {
        let mut binding = RecordingBinding::default();
        render::<PolicyPage, _>(state, &Labels::default(), &mut binding);
        binding
    }

    #[test]
    fn test_empty_catalog_shows_fallback_message() {
        let state = reduce(
            &PolicyPage::initial_state(),
            CatalogAction::Loaded(ContentStore::loaded(Vec::new())),
        );
        let binding = rendered(&state);
        assert_eq!(
            binding.empty_message(),
            Some("No policies matched your filters.")
        );
        let detail = binding.detail.unwrap();
        assert_eq!(detail.intro.as_deref(), Some("Select a policy to see its details."));
        assert!(detail.body.is_none());
    }

    #[test]
    fn test_first_policy_selected_on_load() {
        let binding = rendered(&loaded());
        assert_eq!(
            binding.list_titles(),
            vec!["Equipment Checkout", "Studio & Lab Access and Booking"]
        );
        match &binding.list {
            ListModel::Choices(choices) => {
                assert!(choices[0].active);
                assert!(!choices[1].active);
            }
            other => panic!("expected choices, got {:?}", other),
        }
        let detail = binding.detail.unwrap();
        assert_eq!(detail.title, "Equipment Checkout");
        assert_eq!(detail.updated, None);
        assert!(detail.actions.is_empty());
        assert_eq!(
            detail.body,
            Some(DetailBody::Empty(
                "This policy does not have any sections configured yet.".to_string()
            ))
        );
    }

    #[test]
    fn test_selected_policy_detail() {
        let state = reduce(&loaded(), CatalogAction::SelectItem("studio-general".to_string()));
        let binding = rendered(&state);
        let detail = binding.detail.unwrap();
        assert_eq!(detail.intro, None);
        assert_eq!(detail.updated.as_deref(), Some("Last updated: 2024-08-01"));
        let labels: Vec<&str> = detail.actions.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, vec!["Download PDF", "Open print-friendly view"]);
        assert!(detail.actions[0].download);
        match detail.body {
            Some(DetailBody::Sections(sections)) => {
                assert_eq!(sections.len(), 2);
                assert_eq!(sections[0].bullets, vec!["Only enrolled students may book."]);
                assert_eq!(
                    sections[1].paragraphs,
                    vec!["No trash should be left in the studio."]
                );
            }
            other => panic!("expected sections, got {:?}", other),
        }
    }

    #[test]
    fn test_search_matches_section_text_and_keeps_tab() {
        let state = reduce(&loaded(), CatalogAction::SetSearch("TRASH".to_string()));
        let binding = rendered(&state);
        assert_eq!(binding.list_titles(), vec!["Studio & Lab Access and Booking"]);
        assert_eq!(binding.active_facets(), vec!["spacesResources"]);
        assert_eq!(binding.detail.unwrap().title, "Studio & Lab Access and Booking");
    }

    #[test]
    fn test_tab_switch_selects_first_of_new_tab() {
        let state = reduce(&loaded(), CatalogAction::SelectItem("studio-general".to_string()));
        let state = reduce(
            &state,
            CatalogAction::SetFacet(FacetDim::Primary, Facet::only("studentsIndividuals")),
        );
        let binding = rendered(&state);
        assert_eq!(binding.active_facets(), vec!["studentsIndividuals"]);
        assert_eq!(binding.list_titles(), vec!["Code of Conduct"]);
        assert_eq!(binding.detail.unwrap().title, "Code of Conduct");
    }

    #[test]
    fn test_selection_falls_back_when_filtered_away() {
        let state = reduce(&loaded(), CatalogAction::SelectItem("equipment".to_string()));
        let state = reduce(&state, CatalogAction::SetSearch("studio".to_string()));
        assert_eq!(state.tracker.selected_id(), Some("studio-general"));
    }
}
