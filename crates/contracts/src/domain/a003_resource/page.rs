use super::aggregate::{LinkType, Resource};
use super::branding::ResourceBranding;
use crate::domain::common::FacetDim;
use crate::shared::branding::{first_label, optional_label};
use crate::shared::catalog::{
    CardModel, CatalogPage, ControlsModel, Facet, FacetGroup, FacetStyle, FilterState,
    HeaderModel, Labels, LinkAction, ListModel, SearchModel, Tracker, TrackerPolicy,
};

const FILTER_NOTE: &str =
    "Select a program on the left to see its resources. Use search to narrow down the list.";

/// Страница ресурсов: браузер программ слева, плоский список карточек
/// со ссылками справа.
pub struct ResourcePage;

impl CatalogPage for ResourcePage {
    type Item = Resource;
    type Branding = ResourceBranding;

    const DATA_FILE: &'static str = "resources.json";
    const BRANDING_FILE: &'static str = "resources.json";
    const COLLECTION_FIELD: &'static str = "resources";
    const TRACKER: TrackerPolicy = TrackerPolicy::None;

    fn header(filter: &FilterState, labels: &Labels<ResourceBranding>) -> HeaderModel {
        let cfg = &labels.page;
        let program = match &filter.primary {
            Facet::All => None,
            Facet::Only(code) => Some(code.as_str()),
        };
        let (intro_title, intro_body) = cfg.program_heading(program);

        HeaderModel {
            title: cfg.hero.heading_or("Resources"),
            subtitle: cfg.hero.subtitle(),
            intro_title,
            intro_body,
        }
    }

    fn controls(filter: &FilterState, labels: &Labels<ResourceBranding>) -> ControlsModel {
        let cfg = &labels.page;

        let mut programs = vec![(
            Facet::All,
            first_label(&[cfg.filters.program_all.as_deref()], "All programs"),
        )];
        programs.extend(
            cfg.browser_entries()
                .into_iter()
                .map(|(code, label)| (Facet::Only(code), label)),
        );

        ControlsModel {
            kicker: Some(first_label(&[cfg.sidebar.kicker.as_deref()], "Browse")),
            note: Some(first_label(&[cfg.sidebar.note.as_deref()], FILTER_NOTE)),
            // Плейсхолдер поиска на этой странице не настраивается
            search: SearchModel {
                label: optional_label(&cfg.search.label),
                placeholder: "Search...".to_string(),
                value: filter.search.clone(),
            },
            facets: vec![FacetGroup::build(
                FacetDim::Primary,
                FacetStyle::Browser,
                optional_label(&cfg.filters.program_label),
                &filter.primary,
                programs,
            )],
            list_heading: None,
        }
    }

    fn list(view: &[&Resource], _tracker: &Tracker, labels: &Labels<ResourceBranding>) -> ListModel {
        let cfg = &labels.page;
        let cards = view
            .iter()
            .map(|resource| CardModel {
                id: resource.id.clone(),
                title: resource.name.clone(),
                pill: cfg.program_pill(resource.program.as_deref()),
                summary: optional_label(&resource.description),
                meta: cfg.type_label(resource.category.as_deref()),
                expander: None,
                links: vec![LinkAction {
                    href: resource.url.clone(),
                    label: cfg.link_label(resource.link_type),
                    download: resource.link_type == LinkType::Download,
                    primary: resource.link_type == LinkType::Link,
                }],
            })
            .collect();
        ListModel::Cards(cards)
    }

    fn empty_message(labels: &Labels<ResourceBranding>) -> String {
        labels.page.empty_message()
    }
}
