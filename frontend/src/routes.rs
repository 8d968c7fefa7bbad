use dioxus::prelude::*;

use common::iconography_query::IconographyQueryParams;
use common::route_query::RouteQuery;

use crate::components::navbar::Navbar;
use crate::pages::home_page::HomePage;
use crate::pages::iconography_search_page::IconographySearchPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/iconographie/recherche?:..query")]
    IconographySearchPage { query: RouteQuery },

}

impl Route {
    pub fn iconography_search_from_query(q: &IconographyQueryParams) -> Self {
        Self::IconographySearchPage { query: q.to_route_params() }
    }
}
