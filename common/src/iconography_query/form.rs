//! Decoding of the repeatable date sub-form.
//!
//! The form sends one block per date filter, keyed by a generated id:
//!
//! ```text
//! { "<id>-date-filter": "dateRange",
//!   "<id>-date": { "<id>-dateStart": "1860", "<id>-dateEnd": "1900" } }
//! { "<id>-date-filter": "dateBefore", "<id>-date": "1850" }
//! ```

use crate::search_const::{
    DATE_FILTER_KEY_SUFFIX, DATE_RANGE_END_SUFFIX, DATE_RANGE_START_SUFFIX, DATE_VALUE_KEY_SUFFIX,
};

use super::date_spec::{DateSpec, build_date_spec};
use super::raw_field::RawField;

pub(crate) fn extract_clean_date(form_date: &RawField) -> Vec<DateSpec> {
    let RawField::Map(entries) = form_date else {
        return vec![];
    };

    // block ids, in the order the form sent them
    let mut block_ids: Vec<&str> = vec![];
    for (key, _) in entries.iter() {
        let id = key
            .strip_suffix(DATE_FILTER_KEY_SUFFIX)
            .or_else(|| key.strip_suffix(DATE_VALUE_KEY_SUFFIX))
            .unwrap_or(key);
        if !block_ids.contains(&id) {
            block_ids.push(id);
        }
    }

    let lookup = |key: String| {
        entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, value)| value.clone())
            .unwrap_or_default()
    };

    block_ids
        .into_iter()
        .filter_map(|id| {
            let kind = lookup(format!("{id}{DATE_FILTER_KEY_SUFFIX}"));
            let value = lookup(format!("{id}{DATE_VALUE_KEY_SUFFIX}"));
            build_date_spec(&kind, block_values(value))
        })
        .collect()
}

/// The values of one block. A range is a map of two sub-fields, read start
/// first; a map without the expected sub-fields is read in order.
fn block_values(value: RawField) -> Vec<RawField> {
    match value {
        RawField::Map(entries) => {
            let start = entries.iter().find(|(k, _)| k.ends_with(DATE_RANGE_START_SUFFIX));
            let end = entries.iter().find(|(k, _)| k.ends_with(DATE_RANGE_END_SUFFIX));
            if start.is_none() && end.is_none() {
                entries.into_iter().map(|(_, v)| v).collect()
            } else {
                [start, end].into_iter().flatten().map(|(_, v)| v.clone()).collect()
            }
        }
        other => other.into_list(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn blocks_keep_form_order() {
        let date = RawField::from(&json!({
            "b2-date-filter": "dateAfter",
            "b2-date": "1900",
            "a1-date-filter": "dateExact",
            "a1-date": 1850,
        }));
        assert_eq!(extract_clean_date(&date), vec![DateSpec::After(1900), DateSpec::Exact(1850)]);
    }

    #[test]
    fn range_sub_fields_are_read_by_name() {
        let date = RawField::from(&json!({
            "r-date-filter": "dateRange",
            "r-date": { "r-date-dateEnd": "1900", "r-date-dateStart": "1860" },
        }));
        assert_eq!(extract_clean_date(&date), vec![DateSpec::Range(1860, 1900)]);
    }

    #[test]
    fn empty_blocks_are_dropped() {
        let date = RawField::from(&json!({
            "x-date-filter": "dateRange",
            "x-date": { "x-dateStart": null, "x-dateEnd": "" },
            "y-date-filter": "dateBefore",
            "y-date": "",
            "z-date-filter": "dateExact",
        }));
        assert_eq!(extract_clean_date(&date), vec![]);
    }

    #[test]
    fn non_map_input_yields_nothing() {
        assert_eq!(extract_clean_date(&RawField::Missing), vec![]);
        assert_eq!(extract_clean_date(&RawField::Text("1850".into())), vec![]);
    }
}
