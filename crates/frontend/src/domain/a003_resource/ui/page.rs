use crate::shared::catalog::card_list::CatalogList;
use crate::shared::catalog::controls::CatalogControls;
use crate::shared::catalog::header::{CatalogHeader, SectionIntro};
use crate::shared::catalog::CatalogController;
use contracts::domain::a003_resource::ResourcePage as ResourceCatalog;
use contracts::domain::common::FacetDim;
use contracts::shared::catalog::Facet;
use contracts::shared::config::SiteConfig;
use leptos::prelude::*;

const PREFIX: &str = "resources";

/// Ресурсы: браузер программ слева, список карточек со ссылками справа
#[component]
pub fn ResourcesPage() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let controller = CatalogController::<ResourceCatalog>::start(&config);
    let binding = controller.binding;

    let on_search = Callback::new(move |search: String| controller.set_search(search));
    let on_facet = Callback::new(move |(dim, facet): (FacetDim, Facet)| {
        controller.set_facet(dim, facet)
    });

    view! {
        <div id="a003_resource--page" class="page resources-page">
            <CatalogHeader prefix=PREFIX header=binding.header />
            <div class="resources-layout">
                <aside class="resources-sidebar">
                    <CatalogControls
                        prefix=PREFIX
                        controls=binding.controls
                        on_search=on_search
                        on_facet=on_facet
                    />
                </aside>
                <main class="resources-main">
                    <SectionIntro prefix=PREFIX header=binding.header />
                    <CatalogList prefix=PREFIX list=binding.list />
                </main>
            </div>
        </div>
    }
}
