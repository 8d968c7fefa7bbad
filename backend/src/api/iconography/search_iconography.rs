//! Advanced search over the iconography table.

use common::{iconography::IconographyItemLite, iconography_query::IconographyQueryParams};
use tracing::info;

use crate::api_utils::api_post_json;

pub const SEARCH_ICONOGRAPHY_PATH: &str = "/i/search/iconography";

pub async fn search_iconography(query: IconographyQueryParams) -> anyhow::Result<Vec<IconographyItemLite>> {
    // the whole table is not a search result
    if query.is_empty() {
        info!("empty iconography query, skipping search");
        return Ok(vec![]);
    }
    api_post_json(SEARCH_ICONOGRAPHY_PATH, &query.to_json()).await
}
