//! Read-only summary of the filters applied to the current search.

use dioxus::prelude::*;

use common::iconography_query::IconographyQueryParams;

use crate::data_definitions::search_field::{FilterSummaryRow, filter_summary_rows};

#[component]
pub fn FilterSummary(query: ReadSignal<IconographyQueryParams>) -> Element {
    if query.read().is_empty() {
        return rsx! {};
    }
    let rows = filter_summary_rows(&query.read());

    rsx! {
        div {
            id: "x-filter-summary",
            style: "
                display: flex;
                flex-direction: column;
                gap: 4px;
                padding: 12px 16px;
                background-color: rgb(245, 245, 245);
                border-radius: 8px;
            ",
            h3 { style: "margin: 0 0 6px 0; font-weight: 500;", "Filtres appliqués" }
            for row in rows {
                FilterSummaryLine { key: "{row.label}", row }
            }
        }
    }
}

#[component]
fn FilterSummaryLine(row: FilterSummaryRow) -> Element {
    let FilterSummaryRow { label, op, values } = row;
    let joined = values.join(&format!(" {op} "));
    rsx! {
        div {
            style: "display: flex; flex-direction: row; gap: 8px;",
            span { style: "font-weight: 500; min-width: 140px;", "{label}" }
            span { "{joined}" }
        }
    }
}
