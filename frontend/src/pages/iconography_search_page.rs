use dioxus::prelude::*;

use common::iconography_query::IconographyQueryParams;
use common::route_query::RouteQuery;

use crate::components::search_components::advanced_search_form::AdvancedSearchForm;
use crate::components::search_components::filter_summary::FilterSummary;
use crate::components::search_components::iconography_result_list::IconographyResultList;
use crate::components::suspend_boundary::SectionSuspense;

/// Advanced search page. The whole search lives in the url query.
#[component]
pub fn IconographySearchPage(query: RouteQuery) -> Element {
    let params = IconographyQueryParams::from_route(&query);

    rsx! {
        Title { "Richelieu - Recherche avancée" }
        IconographySearchRootComponent { query: params }
    }
}

#[component]
fn IconographySearchRootComponent(query: ReadSignal<IconographyQueryParams>) -> Element {
    rsx! {
        div {
            id: "x-iconography-search-container",
            style: "
                display: flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                padding: 24px 40px;
                box-sizing: border-box;
            ",
            h1 { style: "margin: 0; font-weight: 500;", "Recherche avancée dans l'iconographie" }
            AdvancedSearchForm { original_query: query }
            FilterSummary { query }
            SectionSuspense {
                section: "Résultats iconographiques",
                IconographyResultList { query }
            }
        }
    }
}
