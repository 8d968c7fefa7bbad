//! Bounds of the dates present in the iconography table.

use common::validation::AllowedDateRange;

use crate::api_utils::api_get_json;

pub const OVERALL_DATE_RANGE_PATH: &str = "/i/iconography-overall-date-range";

pub async fn iconography_overall_date_range() -> anyhow::Result<AllowedDateRange> {
    let bounds = api_get_json::<Vec<i32>>(OVERALL_DATE_RANGE_PATH).await?;
    Ok(AllowedDateRange::from_bounds(&bounds))
}
