//! Client API calls for the iconography search endpoints.

use common::iconography::IconographyItemLite;
use common::iconography_query::IconographyQueryParams;
use common::validation::AllowedDateRange;
use dioxus::prelude::*;

#[server]
pub async fn search_iconography(input: IconographyQueryParams) -> Result<Vec<IconographyItemLite>, ServerFnError> {
    let x = backend::api::iconography::search_iconography(input).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn iconography_overall_date_range() -> Result<AllowedDateRange, ServerFnError> {
    let x = backend::api::iconography::iconography_overall_date_range().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
