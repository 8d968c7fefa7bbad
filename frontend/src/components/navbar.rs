//! Side navigation bar.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdHome, MdSearch};
use dioxus_free_icons::{Icon, IconShape};

use common::iconography_query::IconographyQueryParams;

use crate::components::error_boundary::PageErrorBoundary;
use crate::routes::Route;

/// Shared navbar component.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display:flex;
                flex-direction: row;
                width: 100%;
                height: 100%;
            ",

            div {
                id: "x-nav-sidebar",
                style: "
                    display:flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 24px;
                    width: 70px;
                    height: 100%;
                    background-color: #1C212D;
                    padding: 16px;
                ",
                IconLink { to: Route::HomePage {}, icon: MdHome, label: "Accueil" }
                IconLink {
                    to: Route::iconography_search_from_query(&IconographyQueryParams::default()),
                    icon: MdSearch,
                    label: "Recherche avancée",
                }
            }

            div {
                id: "x-page-container",
                style: "flex-grow:1; min-width: 100px; overflow-y: auto;",
                PageErrorBoundary {
                    page: "Contenu".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static>(to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            span {
                style: "color:white;",
                title: "{label}",
                Icon { icon: icon, style: "width: 26px; height: 26px;" }
            }
        }
    }
}
