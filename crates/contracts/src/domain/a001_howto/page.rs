use super::aggregate::{HowtoCategory, HowtoItem};
use super::branding::HowtoBranding;
use crate::domain::common::{CatalogItem, FacetDim};
use crate::enums::program::Program;
use crate::shared::branding::{first_label, optional_label};
use crate::shared::catalog::detail::resolve_detail;
use crate::shared::catalog::{
    CardModel, CatalogPage, ControlsModel, Expander, Facet, FacetGroup, FacetStyle, FilterState,
    HeaderModel, Labels, ListModel, SearchModel, Tracker, TrackerPolicy,
};

const FRAME_TITLE: &str = "Help guide";
const NO_LINK_MESSAGE: &str = "This guide does not have an associated link yet.";

/// Страница справки: два фасета (программа, категория), карточки
/// раскрываются независимо друг от друга.
pub struct HowtoPage;

impl CatalogPage for HowtoPage {
    type Item = HowtoItem;
    type Branding = HowtoBranding;

    const DATA_FILE: &'static str = "howto.json";
    const BRANDING_FILE: &'static str = "howto.json";
    const COLLECTION_FIELD: &'static str = "items";
    const USES_GLOBAL_BRANDING: bool = true;
    const TRACKER: TrackerPolicy = TrackerPolicy::IndependentExpand;

    fn header(filter: &FilterState, labels: &Labels<HowtoBranding>) -> HeaderModel {
        let cfg = &labels.page;
        let category = match &filter.secondary {
            Facet::All => None,
            Facet::Only(code) => HowtoCategory::from_code(code),
        };

        let (intro_title, intro_body) = match category {
            Some(category) => (cfg.section_title(category), String::new()),
            None => (
                String::new(),
                cfg.hero.second_line().unwrap_or_default().to_string(),
            ),
        };

        HeaderModel {
            title: cfg.hero.heading_or("How-To & Help"),
            subtitle: cfg.hero.subtitle(),
            intro_title,
            intro_body,
        }
    }

    fn controls(filter: &FilterState, labels: &Labels<HowtoBranding>) -> ControlsModel {
        let cfg = &labels.page;

        let mut programs = vec![(
            Facet::All,
            first_label(&[cfg.filters.program_all.as_deref()], "All programs"),
        )];
        programs.extend(
            Program::listed()
                .into_iter()
                .map(|p| (Facet::only(p.code()), labels.global.program_label(Some(p.code())))),
        );

        let mut categories = vec![(
            Facet::All,
            first_label(&[cfg.filters.category_all.as_deref()], "All types"),
        )];
        categories.extend(
            HowtoCategory::all()
                .into_iter()
                .map(|c| (Facet::only(c.code()), cfg.category_label(c))),
        );

        ControlsModel {
            kicker: Some("Browse".to_string()),
            note: None,
            search: SearchModel {
                label: optional_label(&cfg.search.label),
                placeholder: first_label(&[cfg.search.placeholder.as_deref()], "Search help…"),
                value: filter.search.clone(),
            },
            facets: vec![
                FacetGroup::build(
                    FacetDim::Primary,
                    FacetStyle::Pills,
                    optional_label(&cfg.filters.program_label),
                    &filter.primary,
                    programs,
                ),
                FacetGroup::build(
                    FacetDim::Secondary,
                    FacetStyle::Pills,
                    optional_label(&cfg.filters.category_label),
                    &filter.secondary,
                    categories,
                ),
            ],
            list_heading: None,
        }
    }

    fn list(view: &[&HowtoItem], tracker: &Tracker, labels: &Labels<HowtoBranding>) -> ListModel {
        let cfg = &labels.page;
        let cards = view
            .iter()
            .map(|item| {
                let mut meta_bits: Vec<&str> = Vec::new();
                if let Some(label) = item
                    .category
                    .as_deref()
                    .and_then(|c| cfg.configured_category(c))
                {
                    meta_bits.push(label);
                }
                if let Some(label) = item.format.and_then(|f| cfg.format_label(f)) {
                    meta_bits.push(label);
                }

                let expanded = tracker.is_expanded(item.id());
                let label = if expanded {
                    cfg.hide_label()
                } else {
                    cfg.open_label(item.format)
                };

                CardModel {
                    id: item.id.clone(),
                    title: item.title.clone(),
                    pill: labels.global.program_label(item.program.as_deref()),
                    summary: optional_label(&item.summary),
                    meta: (!meta_bits.is_empty()).then(|| meta_bits.join(" • ")),
                    expander: Some(Expander {
                        expanded,
                        label,
                        content: resolve_detail(*item, FRAME_TITLE, NO_LINK_MESSAGE),
                    }),
                    links: Vec::new(),
                }
            })
            .collect();
        ListModel::Cards(cards)
    }

    fn empty_message(labels: &Labels<HowtoBranding>) -> String {
        labels.page.empty_message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::branding::{parse_branding, GlobalBranding};
    use crate::shared::catalog::{
        reduce, render, CatalogAction, ContentStore, DetailContent, KeyedCard, PageState,
        RecordingBinding,
    };
    use crate::shared::catalog::content_store::parse_collection;
    use serde_json::json;

    fn fixture() -> Vec<HowtoItem> {
        let payload = json!({
            "items": [
                {
                    "id": "adobe",
                    "title": "Accessing Adobe Creative Cloud",
                    "program": "general",
                    "category": "accounts",
                    "summary": "Sign in with your student account.",
                    "format": "textOnly",
                    "url": "https://example.com/adobe",
                    "steps": ["Open the portal", "Choose Adobe"]
                },
                {
                    "id": "protools",
                    "title": "Pro Tools session basics",
                    "program": "mpra",
                    "category": "walkthroughs",
                    "format": "video",
                    "url": "https://video.example/embed/1"
                },
                {
                    "id": "printer",
                    "title": "printer jams",
                    "program": "da",
                    "category": "troubleshooting",
                    "format": "htmlEmbed"
                },
                { "id": "untitled", "program": "mpra" }
            ]
        })
        .to_string();
        parse_collection(&payload, "items").unwrap()
    }

    fn labels() -> Labels<HowtoBranding> {
        Labels::default()
    }

    fn loaded() -> PageState<HowtoItem> {
        reduce(
            &HowtoPage::initial_state(),
            CatalogAction::Loaded(ContentStore::loaded(fixture())),
        )
    }

    fn rendered(state: &PageState<HowtoItem>, labels: &Labels<HowtoBranding>) -> RecordingBinding {
        let mut binding = RecordingBinding::default();
        render::<HowtoPage, _>(state, labels, &mut binding);
        binding
    }

    fn cards(binding: &RecordingBinding) -> &[CardModel] {
        match &binding.list {
            ListModel::Cards(cards) => cards,
            other => panic!("expected cards, got {:?}", other),
        }
    }

    #[test]
    fn test_pending_state_renders_no_list() {
        let binding = rendered(&HowtoPage::initial_state(), &labels());
        assert_eq!(binding.list, ListModel::Pending);
        assert_eq!(binding.controls.search.placeholder, "Search help…");
    }

    #[test]
    fn test_cards_sorted_and_untitled_dropped() {
        let binding = rendered(&loaded(), &labels());
        assert_eq!(
            binding.list_titles(),
            vec![
                "Accessing Adobe Creative Cloud",
                "printer jams",
                "Pro Tools session basics"
            ]
        );
    }

    #[test]
    fn test_detail_shapes_per_card() {
        let binding = rendered(&loaded(), &labels());
        let cards = cards(&binding);
        let content: Vec<&DetailContent> = cards
            .iter()
            .map(|c| &c.expander.as_ref().unwrap().content)
            .collect();
        assert!(matches!(content[0], DetailContent::Structured { .. }));
        assert_eq!(
            content[1],
            &DetailContent::Unavailable(NO_LINK_MESSAGE.to_string())
        );
        assert!(matches!(content[2], DetailContent::Frame(_)));
    }

    #[test]
    fn test_toggle_labels_and_flags() {
        let state = loaded();
        let binding = rendered(&state, &labels());
        let labels_before: Vec<&str> = cards(&binding)
            .iter()
            .map(|c| c.expander.as_ref().unwrap().label.as_str())
            .collect();
        assert_eq!(labels_before, vec!["Open guide", "View details", "Watch video"]);

        let state = reduce(&state, CatalogAction::ToggleExpand("protools".to_string()));
        let binding = rendered(&state, &labels());
        let expander = cards(&binding)[2].expander.clone().unwrap();
        assert!(expander.expanded);
        assert_eq!(expander.label, "Hide guide");
        assert!(!cards(&binding)[0].expander.as_ref().unwrap().expanded);
    }

    #[test]
    fn test_filtered_out_card_comes_back_collapsed() {
        let state = loaded();
        let state = reduce(&state, CatalogAction::ToggleExpand("protools".to_string()));
        let state = reduce(&state, CatalogAction::ToggleExpand("adobe".to_string()));

        let state = reduce(&state, CatalogAction::SetSearch("adobe".to_string()));
        assert!(state.tracker.is_expanded("adobe"));
        assert!(!state.tracker.is_expanded("protools"));

        let state = reduce(&state, CatalogAction::SetSearch(String::new()));
        let binding = rendered(&state, &labels());
        let flags: Vec<bool> = cards(&binding)
            .iter()
            .map(|c| c.expander.as_ref().unwrap().expanded)
            .collect();
        assert_eq!(flags, vec![true, false, false]);
    }

    #[test]
    fn test_facet_buttons_follow_filter_state() {
        let state = loaded();
        let binding = rendered(&state, &labels());
        assert_eq!(binding.active_facets(), vec!["all", "all"]);

        let state = reduce(
            &state,
            CatalogAction::SetFacet(FacetDim::Primary, Facet::only("mpra")),
        );
        let state = reduce(
            &state,
            CatalogAction::SetFacet(FacetDim::Secondary, Facet::only("walkthroughs")),
        );
        let binding = rendered(&state, &labels());
        assert_eq!(binding.active_facets(), vec!["mpra", "walkthroughs"]);
        assert_eq!(binding.list_titles(), vec!["Pro Tools session basics"]);
        assert_eq!(binding.header.intro_title, "Walkthroughs");
    }

    #[test]
    fn test_empty_view_shows_fallback_message() {
        let state = reduce(&loaded(), CatalogAction::SetSearch("zzz".to_string()));
        let binding = rendered(&state, &labels());
        assert_eq!(
            binding.empty_message(),
            Some("No help items matched your filters.")
        );
    }

    #[test]
    fn test_program_pills_and_card_pill_use_global_names() {
        let labels = Labels::new(
            HowtoBranding::default(),
            GlobalBranding {
                programs: [("mpra".to_string(), "Recording Arts".to_string())]
                    .into_iter()
                    .collect(),
                ..GlobalBranding::default()
            },
        );
        let binding = rendered(&loaded(), &labels);
        let program_labels: Vec<&str> = binding.controls.facets[0]
            .options
            .iter()
            .map(|o| o.label.as_str())
            .collect();
        assert_eq!(
            program_labels,
            vec![
                "All programs",
                "Recording Arts",
                "Media Studies",
                "Communication & the Arts",
                "Digital Arts",
                "General"
            ]
        );
        assert_eq!(cards(&binding)[2].pill, "Recording Arts");
    }

    #[test]
    fn test_meta_line_uses_configured_labels_only() {
        let page: HowtoBranding = serde_json::from_value(json!({
            "categories": { "accounts": "Accounts" },
            "itemLabels": { "textOnly": "Text guide" }
        }))
        .unwrap();
        let binding = rendered(&loaded(), &Labels::new(page, GlobalBranding::default()));
        let cards = cards(&binding);
        assert_eq!(cards[0].meta.as_deref(), Some("Accounts • Text guide"));
        assert_eq!(cards[1].meta, None);
    }

    #[test]
    fn test_all_category_intro_uses_second_hero_line() {
        let page: HowtoBranding = serde_json::from_value(json!({
            "hero": { "heading": "Help", "body": ["Sub", "Pick a topic"] }
        }))
        .unwrap();
        let binding = rendered(&loaded(), &Labels::new(page, GlobalBranding::default()));
        assert_eq!(binding.header.title, "Help");
        assert_eq!(binding.header.subtitle, "Sub");
        assert_eq!(binding.header.intro_title, "");
        assert_eq!(binding.header.intro_body, "Pick a topic");
    }

    #[test]
    fn test_one_rebuild_per_keystroke() {
        let labels = labels();
        let mut binding = RecordingBinding::default();
        let mut state = loaded();
        let mut typed = String::new();
        for ch in "pro tools".chars() {
            typed.push(ch);
            state = reduce(&state, CatalogAction::SetSearch(typed.clone()));
            render::<HowtoPage, _>(&state, &labels, &mut binding);
        }
        assert_eq!(binding.rebuilds, 9);
        assert_eq!(binding.list_titles(), vec!["Pro Tools session basics"]);
        assert_eq!(binding.controls.search.value, "pro tools");
    }

    #[test]
    fn test_unknown_codes_filter_exactly_and_show_raw_pill() {
        let payload = r#"{"items": [
            {"id": "m", "title": "Mixing a podcast", "program": "podcasting", "category": "misc"},
            {"id": "o", "title": "Lost and found", "program": "general", "category": "other"}
        ]}"#;
        let items: Vec<HowtoItem> = parse_collection(payload, "items").unwrap();
        let state = reduce(
            &HowtoPage::initial_state(),
            CatalogAction::Loaded(ContentStore::loaded(items)),
        );
        let page: HowtoBranding =
            serde_json::from_str(r#"{"categories": {"misc": "Miscellaneous"}}"#).unwrap();
        let labels = Labels::new(page, GlobalBranding::default());

        let binding = rendered(&state, &labels);
        let pills: Vec<&str> = cards(&binding).iter().map(|c| c.pill.as_str()).collect();
        assert_eq!(pills, vec!["General", "podcasting"]);
        assert_eq!(cards(&binding)[1].meta.as_deref(), Some("Miscellaneous"));

        let other = reduce(
            &state,
            CatalogAction::SetFacet(FacetDim::Secondary, Facet::only("other")),
        );
        assert_eq!(rendered(&other, &labels).list_titles(), vec!["Lost and found"]);

        let searched = reduce(&state, CatalogAction::SetSearch("podcasting".to_string()));
        assert_eq!(rendered(&searched, &labels).list_titles(), vec!["Mixing a podcast"]);
    }

    #[test]
    fn test_mistyped_branding_key_keeps_other_overrides() {
        let page: HowtoBranding = parse_branding(
            r#"{"emptyStates": {"noMatch": "Nothing here"}, "hero": {"heading": "Help", "body": "one line"}}"#,
            "branding/howto.json",
        )
        .unwrap();
        let labels = Labels::new(page, GlobalBranding::default());
        let state = reduce(&loaded(), CatalogAction::SetSearch("zzz".to_string()));
        let binding = rendered(&state, &labels);
        assert_eq!(binding.empty_message(), Some("Nothing here"));
        assert_eq!(binding.header.title, "Help");
        assert_eq!(binding.header.subtitle, "");
    }

    #[test]
    fn test_toggle_leaves_other_cards_untouched() {
        let state = loaded();
        let before = rendered(&state, &labels()).list.keyed_cards();
        let toggled = reduce(&state, CatalogAction::ToggleExpand("protools".to_string()));
        let after = rendered(&toggled, &labels()).list.keyed_cards();

        let keys = |cards: &[KeyedCard]| cards.iter().map(|k| k.key.clone()).collect::<Vec<_>>();
        assert_eq!(keys(&before), keys(&after));

        for (old, new) in before.iter().zip(&after) {
            let (old_exp, new_exp) = (
                old.card.expander.as_ref().unwrap(),
                new.card.expander.as_ref().unwrap(),
            );
            assert_eq!(old_exp.content, new_exp.content);
            if old.key == "protools" {
                assert!(!old_exp.expanded && new_exp.expanded);
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        let state = loaded();
        let first = rendered(&state, &labels());
        let second = rendered(&state, &labels());
        assert_eq!(first.list, second.list);
        assert_eq!(first.controls, second.controls);
        assert_eq!(first.header, second.header);
    }
}
