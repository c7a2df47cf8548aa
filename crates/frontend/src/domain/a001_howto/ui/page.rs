use crate::shared::catalog::card_list::CatalogList;
use crate::shared::catalog::controls::CatalogControls;
use crate::shared::catalog::header::{CatalogHeader, SectionIntro};
use crate::shared::catalog::CatalogController;
use contracts::domain::a001_howto::HowtoPage as HowtoCatalog;
use contracts::domain::common::FacetDim;
use contracts::shared::catalog::Facet;
use contracts::shared::config::SiteConfig;
use leptos::prelude::*;

const PREFIX: &str = "howto";

/// Справка: фильтры слева, карточки с раскрывающимся содержимым справа
#[component]
pub fn HowtoPage() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let controller = CatalogController::<HowtoCatalog>::start(&config);
    let binding = controller.binding;

    let on_search = Callback::new(move |search: String| controller.set_search(search));
    let on_facet = Callback::new(move |(dim, facet): (FacetDim, Facet)| {
        controller.set_facet(dim, facet)
    });
    let on_toggle = Callback::new(move |id: String| controller.toggle(id));

    view! {
        <div id="a001_howto--page" class="page howto-page">
            <CatalogHeader prefix=PREFIX header=binding.header />
            <div class="howto-layout">
                <aside class="howto-sidebar">
                    <CatalogControls
                        prefix=PREFIX
                        controls=binding.controls
                        on_search=on_search
                        on_facet=on_facet
                    />
                </aside>
                <main class="howto-main">
                    <SectionIntro prefix=PREFIX header=binding.header />
                    <CatalogList prefix=PREFIX list=binding.list on_toggle=on_toggle />
                </main>
            </div>
        </div>
    }
}
