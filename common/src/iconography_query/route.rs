//! Flattening of the date filters into dotted route keys and back.
//!
//! `date.<i>.filter` holds the kind of filter `i`, `date.<i>.data.<j>` its
//! `j`-th year.

use std::collections::BTreeMap;

use crate::route_query::RouteQuery;
use crate::search_const::{DATE_ROUTE_KEY, LEGACY_DATE_FILTER_ROUTE_KEY};

use super::date_spec::{DateSpec, build_date_spec};
use super::raw_field::RawField;

#[derive(Debug, Default)]
struct DateBlock {
    filter: RawField,
    indexed: BTreeMap<usize, Vec<RawField>>,
    unindexed: Vec<RawField>,
}

pub(crate) fn has_dotted_date(query: &RouteQuery) -> bool {
    query.iter().any(|(key, _)| is_dotted_date_key(key))
}

fn is_dotted_date_key(key: &str) -> bool {
    key.strip_prefix(DATE_ROUTE_KEY).is_some_and(|rest| rest.starts_with('.'))
}

pub(crate) fn unflatten_date(query: &RouteQuery) -> Vec<DateSpec> {
    let mut blocks: BTreeMap<usize, DateBlock> = BTreeMap::new();
    for (key, value) in query.iter() {
        if !is_dotted_date_key(key) {
            continue;
        }
        let mut parts = key[DATE_ROUTE_KEY.len() + 1..].split('.');
        let Some(index) = parts.next().and_then(|i| i.parse::<usize>().ok()) else {
            continue;
        };
        let value = RawField::from(value);
        match (parts.next(), parts.next(), parts.next()) {
            (Some("filter"), None, None) => blocks.entry(index).or_default().filter = value,
            (Some("data"), None, None) => blocks.entry(index).or_default().unindexed.extend(value.into_list()),
            (Some("data"), Some(j), None) => {
                if let Ok(j) = j.parse::<usize>() {
                    blocks.entry(index).or_default().indexed.entry(j).or_default().extend(value.into_list());
                }
            }
            _ => {}
        }
    }

    blocks
        .into_values()
        .filter_map(|block| {
            let values = block.indexed.into_values().flatten().chain(block.unindexed).collect();
            build_date_spec(&block.filter, values)
        })
        .collect()
}

/// Older URLs carried a single filter as `dateFilter=<kind>&date=<year>`.
pub(crate) fn legacy_date(query: &RouteQuery) -> Vec<DateSpec> {
    let kind = query.get(LEGACY_DATE_FILTER_ROUTE_KEY).map(RawField::from).unwrap_or_default();
    let values = query.get(DATE_ROUTE_KEY).map(|v| RawField::from(v).into_list()).unwrap_or_default();
    build_date_spec(&kind, values).into_iter().collect()
}

pub(crate) fn flatten_date(dates: &[DateSpec], query: &mut RouteQuery) {
    for (i, date) in dates.iter().enumerate() {
        query.insert(format!("{DATE_ROUTE_KEY}.{i}.filter"), date.kind().as_str());
        for (j, year) in date.years().into_iter().enumerate() {
            query.insert(format!("{DATE_ROUTE_KEY}.{i}.data.{j}"), i64::from(year));
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::route_query::RouteValue;

    #[test]
    fn flatten_writes_dotted_keys() {
        let mut query = RouteQuery::new();
        flatten_date(&[DateSpec::Range(1860, 1900), DateSpec::Before(1850)], &mut query);
        assert_eq!(query.get("date.0.filter"), Some(&RouteValue::Text("dateRange".into())));
        assert_eq!(query.get("date.0.data.1"), Some(&RouteValue::Number(1900)));
        assert_eq!(query.get("date.1.data.0"), Some(&RouteValue::Number(1850)));
        assert_eq!(query.len(), 5);
    }

    #[test]
    fn unflatten_orders_blocks_numerically() {
        let query = RouteQuery::parse(
            "date.10.filter=dateAfter&date.10.data.0=1900&date.2.filter=dateRange&date.2.data.1=1870&date.2.data.0=1860",
        );
        assert_eq!(unflatten_date(&query), vec![DateSpec::Range(1860, 1870), DateSpec::After(1900)]);
    }

    #[test]
    fn unflatten_accepts_data_lists_and_drops_bad_blocks() {
        let query = RouteQuery::parse(
            "date.0.filter=dateRange&date.0.data=1860&date.0.data=1900&date.1.filter=dateExact&date.1.data.0=abc&date.x.filter=dateExact",
        );
        assert_eq!(unflatten_date(&query), vec![DateSpec::Range(1860, 1900)]);
    }

    #[test]
    fn dotted_keys_are_told_apart_from_legacy_ones() {
        assert!(has_dotted_date(&RouteQuery::parse("date.0.filter=dateExact")));
        assert!(!has_dotted_date(&RouteQuery::parse("date=1850&dateFilter=dateExact")));
    }

    #[test]
    fn legacy_urls_are_read() {
        let query = RouteQuery::parse("dateFilter=dateRange&date=1860&date=1900");
        assert_eq!(legacy_date(&query), vec![DateSpec::Range(1860, 1900)]);
    }
}
