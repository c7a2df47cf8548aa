use crate::shared::catalog::card_list::CatalogList;
use crate::shared::catalog::controls::CatalogControls;
use crate::shared::catalog::detail_pane::DetailPaneView;
use crate::shared::catalog::header::{CatalogHeader, SectionIntro};
use crate::shared::catalog::CatalogController;
use contracts::domain::a002_policy::PolicyPage as PolicyCatalog;
use contracts::domain::common::FacetDim;
use contracts::shared::catalog::Facet;
use contracts::shared::config::SiteConfig;
use leptos::prelude::*;

const PREFIX: &str = "policies";

/// Политики: вкладки и поиск сверху, список слева, детали справа
#[component]
pub fn PoliciesPage() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let controller = CatalogController::<PolicyCatalog>::start(&config);
    let binding = controller.binding;

    let on_search = Callback::new(move |search: String| controller.set_search(search));
    let on_facet = Callback::new(move |(dim, facet): (FacetDim, Facet)| {
        controller.set_facet(dim, facet)
    });
    let on_select = Callback::new(move |id: String| controller.select(id));

    let list_heading = move || {
        binding
            .controls
            .with(|c| c.list_heading.clone())
            .map(|h| view! { <h2 class="policies-list-heading">{h}</h2> })
    };

    view! {
        <div id="a002_policy--page" class="page policies-page">
            <CatalogHeader prefix=PREFIX header=binding.header />
            <CatalogControls
                prefix=PREFIX
                controls=binding.controls
                on_search=on_search
                on_facet=on_facet
            />
            <SectionIntro prefix=PREFIX header=binding.header />
            <div class="policies-layout">
                <nav class="policies-list-column">
                    {list_heading}
                    <CatalogList prefix=PREFIX list=binding.list on_select=on_select />
                </nav>
                <DetailPaneView prefix=PREFIX detail=binding.detail />
            </div>
        </div>
    }
}
