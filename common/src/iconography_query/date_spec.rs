//! Date filters: one kind and one or two years.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::raw_field::RawField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateFilterKind {
    #[serde(rename = "dateExact")]
    Exact,
    #[serde(rename = "dateBefore")]
    Before,
    #[serde(rename = "dateAfter")]
    After,
    #[serde(rename = "dateRange")]
    Range,
}

impl DateFilterKind {
    pub const ALL: [DateFilterKind; 4] =
        [DateFilterKind::Exact, DateFilterKind::Before, DateFilterKind::After, DateFilterKind::Range];

    pub fn as_str(&self) -> &'static str {
        match self {
            DateFilterKind::Exact => "dateExact",
            DateFilterKind::Before => "dateBefore",
            DateFilterKind::After => "dateAfter",
            DateFilterKind::Range => "dateRange",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == s)
    }

    /// Number of years a filter of this kind holds.
    pub fn year_count(&self) -> usize {
        match self {
            DateFilterKind::Range => 2,
            _ => 1,
        }
    }

    /// Label shown in the search form.
    pub fn label(&self) -> &'static str {
        match self {
            DateFilterKind::Exact => "Date exacte",
            DateFilterKind::Before => "Avant",
            DateFilterKind::After => "Après",
            DateFilterKind::Range => "Entre",
        }
    }
}

/// One date filter. A range always has `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DateSpecRepr", into = "DateSpecRepr")]
pub enum DateSpec {
    Exact(i32),
    Before(i32),
    After(i32),
    Range(i32, i32),
}

/// Wire shape: `{ "filter": "dateRange", "data": [1860, 1900] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DateSpecRepr {
    filter: DateFilterKind,
    data: Vec<i32>,
}

impl DateSpec {
    /// Build a filter from its kind and years. Returns `None` when the number
    /// of years does not fit the kind or when a range is inverted.
    pub fn new(kind: DateFilterKind, years: &[i32]) -> Option<Self> {
        match (kind, years) {
            (DateFilterKind::Exact, &[year]) => Some(DateSpec::Exact(year)),
            (DateFilterKind::Before, &[year]) => Some(DateSpec::Before(year)),
            (DateFilterKind::After, &[year]) => Some(DateSpec::After(year)),
            (DateFilterKind::Range, &[start, end]) if start <= end => Some(DateSpec::Range(start, end)),
            _ => None,
        }
    }

    pub fn kind(&self) -> DateFilterKind {
        match self {
            DateSpec::Exact(_) => DateFilterKind::Exact,
            DateSpec::Before(_) => DateFilterKind::Before,
            DateSpec::After(_) => DateFilterKind::After,
            DateSpec::Range(_, _) => DateFilterKind::Range,
        }
    }

    pub fn years(&self) -> Vec<i32> {
        match *self {
            DateSpec::Exact(year) | DateSpec::Before(year) | DateSpec::After(year) => vec![year],
            DateSpec::Range(start, end) => vec![start, end],
        }
    }
}

impl TryFrom<DateSpecRepr> for DateSpec {
    type Error = String;

    fn try_from(repr: DateSpecRepr) -> Result<Self, Self::Error> {
        DateSpec::new(repr.filter, &repr.data)
            .ok_or_else(|| format!("invalid years {:?} for date filter {}", repr.data, repr.filter.as_str()))
    }
}

impl From<DateSpec> for DateSpecRepr {
    fn from(spec: DateSpec) -> Self {
        DateSpecRepr { filter: spec.kind(), data: spec.years() }
    }
}

impl Display for DateSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateSpec::Exact(year) => write!(f, "en {year}"),
            DateSpec::Before(year) => write!(f, "avant {year}"),
            DateSpec::After(year) => write!(f, "après {year}"),
            DateSpec::Range(start, end) => write!(f, "entre {start} et {end}"),
        }
    }
}

/// Read a year. Integral decimals such as `"1860.0"` are accepted.
pub(crate) fn parse_year(field: &RawField) -> Option<i32> {
    let text = field.as_text()?.trim();
    if let Ok(year) = text.parse::<i32>() {
        return Some(year);
    }
    let number = text.parse::<f64>().ok()?;
    if number.is_finite() && number.fract() == 0.0 && number >= i32::MIN as f64 && number <= i32::MAX as f64 {
        Some(number as i32)
    } else {
        None
    }
}

/// Build one date filter from a raw kind and its raw values, the common
/// step of the form and route decoders. Blank instances, unknown kinds,
/// unparseable years and year counts that do not fit the kind are dropped.
pub(crate) fn build_date_spec(kind: &RawField, values: Vec<RawField>) -> Option<DateSpec> {
    if values.iter().all(RawField::is_blank) {
        return None;
    }
    let Some(kind) = kind.as_text().and_then(DateFilterKind::parse) else {
        tracing::debug!("dropping date filter with unknown kind {kind:?}");
        return None;
    };
    let years = values
        .iter()
        .filter(|value| !value.is_blank())
        .filter_map(|value| {
            let year = parse_year(value);
            if year.is_none() {
                tracing::debug!("dropping unparseable year {value:?}");
            }
            year
        })
        .collect::<Vec<_>>();
    let spec = DateSpec::new(kind, &years);
    if spec.is_none() {
        tracing::debug!("dropping date filter {} with years {years:?}", kind.as_str());
    }
    spec
}

/// Read date filters already in the wire shape,
/// `[{ "filter": "dateRange", "data": [1860, 1900] }, ...]`, with the same
/// rules as the form and route decoders.
pub(crate) fn clean_date_list(field: RawField) -> Vec<DateSpec> {
    field
        .into_list()
        .into_iter()
        .filter_map(|item| {
            let RawField::Map(entries) = item else {
                tracing::debug!("dropping date filter {item:?}, not an object");
                return None;
            };
            let get = |key: &str| entries.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone()).unwrap_or_default();
            build_date_spec(&get("filter"), get("data").into_list())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn text(s: &str) -> RawField {
        RawField::Text(s.to_string())
    }

    #[test]
    fn wire_shape() {
        assert_eq!(
            serde_json::to_value(DateSpec::Range(1860, 1900)).unwrap(),
            json!({ "filter": "dateRange", "data": [1860, 1900] })
        );
        let parsed: DateSpec = serde_json::from_value(json!({ "filter": "dateBefore", "data": [1850] })).unwrap();
        assert_eq!(parsed, DateSpec::Before(1850));
    }

    #[test]
    fn wire_shape_rejects_inverted_range() {
        let parsed = serde_json::from_value::<DateSpec>(json!({ "filter": "dateRange", "data": [1900, 1860] }));
        assert!(parsed.is_err());
    }

    #[test]
    fn years_are_coerced() {
        assert_eq!(parse_year(&text(" 1860 ")), Some(1860));
        assert_eq!(parse_year(&text("1860.0")), Some(1860));
        assert_eq!(parse_year(&text("1860.5")), None);
        assert_eq!(parse_year(&text("dix-huit")), None);
        assert_eq!(parse_year(&RawField::Null), None);
    }

    #[test]
    fn build_checks_kind_and_year_count() {
        assert_eq!(build_date_spec(&text("dateExact"), vec![text("1850")]), Some(DateSpec::Exact(1850)));
        assert_eq!(
            build_date_spec(&text("dateRange"), vec![text("1860"), text("1900")]),
            Some(DateSpec::Range(1860, 1900))
        );
        assert_eq!(build_date_spec(&text("dateRange"), vec![text("1860"), text("")]), None);
        assert_eq!(build_date_spec(&text("dateRange"), vec![text("1900"), text("1860")]), None);
        assert_eq!(build_date_spec(&text("dateSometime"), vec![text("1850")]), None);
        assert_eq!(build_date_spec(&text("dateBefore"), vec![text("vers 1850")]), None);
        assert_eq!(build_date_spec(&text("dateBefore"), vec![RawField::Missing]), None);
    }

    #[test]
    fn wire_shaped_lists_are_cleaned() {
        let field = RawField::from(&json!([
            { "filter": "dateRange", "data": ["1860", 1900] },
            { "filter": "dateRange", "data": [1900, 1860] },
            { "filter": "dateBefore", "data": 1850 },
            { "filter": "dateExact", "data": [] },
            "dateAfter",
        ]));
        assert_eq!(clean_date_list(field), vec![DateSpec::Range(1860, 1900), DateSpec::Before(1850)]);
        assert_eq!(clean_date_list(RawField::Missing), vec![]);
    }

    #[test]
    fn french_display() {
        assert_eq!(DateSpec::After(1789).to_string(), "après 1789");
        assert_eq!(DateSpec::Range(1860, 1900).to_string(), "entre 1860 et 1900");
    }
}
