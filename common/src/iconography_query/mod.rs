//! Query parameters of the iconography advanced search.
//!
//! [`IconographyQueryParams`] is the canonical form of one search. It is
//! built in one step, from the advanced search form payload, from the
//! route query of the search page or from its own JSON, and cleaned on the
//! way in: every source ends up with the same field set and the same
//! types. It is then written back out as plain JSON (sent to the API) or as
//! a flat route query (written into the URL).

mod boolean_op;
mod date_spec;
mod error;
mod form;
mod raw_field;
mod route;

pub use boolean_op::BooleanOp;
pub use date_spec::{DateFilterKind, DateSpec};
use date_spec::clean_date_list;
pub use error::QueryParamsError;
pub(crate) use raw_field::RawField;

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::route_query::RouteQuery;
use crate::search_const::{DATE_ROUTE_KEY, LEGACY_DATE_FILTER_ROUTE_KEY};
use crate::strings::simplify_string;

/// Where the raw data given to [`IconographyQueryParams::new`] comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuerySource {
    Form,
    Route,
}

impl FromStr for QuerySource {
    type Err = QueryParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "form" => Ok(QuerySource::Form),
            "route" => Ok(QuerySource::Route),
            other => Err(QueryParamsError::InvalidSource(other.to_string())),
        }
    }
}

/// Deserializing reads the canonical JSON and cleans it like the other
/// constructors do.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Value", rename_all = "camelCase")]
pub struct IconographyQueryParams {
    // free text, simplified
    title: Vec<String>,
    author: Vec<String>,
    publisher: Vec<String>,
    // category keys, kept verbatim
    theme: Vec<String>,
    named_entity: Vec<String>,
    institution: Vec<String>,
    date: Vec<DateSpec>,

    title_boolean_op: BooleanOp,
    author_boolean_op: BooleanOp,
    publisher_boolean_op: BooleanOp,
    theme_boolean_op: BooleanOp,
    named_entity_boolean_op: BooleanOp,
    institution_boolean_op: BooleanOp,
    date_boolean_op: BooleanOp,
}

impl From<Value> for IconographyQueryParams {
    fn from(data: Value) -> Self {
        Self::from_json(&data)
    }
}

impl IconographyQueryParams {
    /// Build the parameters from `data`, read according to `from`
    /// (`"form"` or `"route"`). With `"route"`, `data` is a flat JSON
    /// object of route query values.
    pub fn new(data: &Value, from: &str) -> Result<Self, QueryParamsError> {
        Ok(match from.parse::<QuerySource>()? {
            QuerySource::Form => Self::from_form(data),
            QuerySource::Route => Self::from_route(&RouteQuery::from_json(data)),
        })
    }

    /// Build the parameters from the advanced search form payload.
    pub fn from_form(data: &Value) -> Self {
        let field = |key: &str| data.get(key).map(RawField::from).unwrap_or_default();
        let date = form::extract_clean_date(&field(DATE_ROUTE_KEY));
        Self::from_fields(field, date)
    }

    /// Build the parameters from the route query of the search page.
    ///
    /// Values are cleaned again: a URL can be edited by hand, and a list
    /// holding a single value is read back by the router as a scalar.
    pub fn from_route(query: &RouteQuery) -> Self {
        let field = |key: &str| query.get(key).map(RawField::from).unwrap_or_default();
        let date = if route::has_dotted_date(query) {
            route::unflatten_date(query)
        } else if query.contains_key(LEGACY_DATE_FILTER_ROUTE_KEY) {
            route::legacy_date(query)
        } else {
            vec![]
        };
        Self::from_fields(field, date)
    }

    /// Build the parameters from their canonical JSON, as written by
    /// [`Self::to_json`]. Values are cleaned again since the JSON may come
    /// from a client.
    pub fn from_json(data: &Value) -> Self {
        let field = |key: &str| data.get(key).map(RawField::from).unwrap_or_default();
        let date = clean_date_list(field(DATE_ROUTE_KEY));
        Self::from_fields(field, date)
    }

    fn from_fields(field: impl Fn(&str) -> RawField, date: Vec<DateSpec>) -> Self {
        let simplified = |key: &str| field(key).into_texts().iter().map(|s| simplify_string(s)).collect::<Vec<_>>();
        let op = |key: &str| BooleanOp::from_raw(&field(key));
        Self {
            title: simplified("title"),
            author: simplified("author"),
            publisher: simplified("publisher"),
            theme: field("theme").into_texts(),
            named_entity: field("namedEntity").into_texts(),
            institution: field("institution").into_texts(),
            date,
            title_boolean_op: op("titleBooleanOp"),
            author_boolean_op: op("authorBooleanOp"),
            publisher_boolean_op: op("publisherBooleanOp"),
            theme_boolean_op: op("themeBooleanOp"),
            named_entity_boolean_op: op("namedEntityBooleanOp"),
            institution_boolean_op: op("institutionBooleanOp"),
            date_boolean_op: op("dateBooleanOp"),
        }
    }

    pub fn title(&self) -> &[String] {
        &self.title
    }

    pub fn author(&self) -> &[String] {
        &self.author
    }

    pub fn publisher(&self) -> &[String] {
        &self.publisher
    }

    pub fn theme(&self) -> &[String] {
        &self.theme
    }

    pub fn named_entity(&self) -> &[String] {
        &self.named_entity
    }

    pub fn institution(&self) -> &[String] {
        &self.institution
    }

    pub fn date(&self) -> &[DateSpec] {
        &self.date
    }

    pub fn title_boolean_op(&self) -> BooleanOp {
        self.title_boolean_op
    }

    pub fn author_boolean_op(&self) -> BooleanOp {
        self.author_boolean_op
    }

    pub fn publisher_boolean_op(&self) -> BooleanOp {
        self.publisher_boolean_op
    }

    pub fn theme_boolean_op(&self) -> BooleanOp {
        self.theme_boolean_op
    }

    pub fn named_entity_boolean_op(&self) -> BooleanOp {
        self.named_entity_boolean_op
    }

    pub fn institution_boolean_op(&self) -> BooleanOp {
        self.institution_boolean_op
    }

    pub fn date_boolean_op(&self) -> BooleanOp {
        self.date_boolean_op
    }

    /// Plain JSON copy of the parameters. The field set and order never
    /// change.
    pub fn to_json(&self) -> Value {
        json!({
            "title": self.title,
            "author": self.author,
            "publisher": self.publisher,
            "theme": self.theme,
            "namedEntity": self.named_entity,
            "institution": self.institution,
            "date": self.date,

            "titleBooleanOp": self.title_boolean_op,
            "authorBooleanOp": self.author_boolean_op,
            "publisherBooleanOp": self.publisher_boolean_op,
            "themeBooleanOp": self.theme_boolean_op,
            "namedEntityBooleanOp": self.named_entity_boolean_op,
            "institutionBooleanOp": self.institution_boolean_op,
            "dateBooleanOp": self.date_boolean_op,
        })
    }

    /// Flat query for the router: the JSON copy with `date` written as
    /// dotted keys (`date.0.filter`, `date.0.data.0`, ...).
    pub fn to_route_params(&self) -> RouteQuery {
        let mut json = self.to_json();
        if let Value::Object(map) = &mut json {
            map.remove(DATE_ROUTE_KEY);
        }
        let mut query = RouteQuery::from_json(&json);
        route::flatten_date(&self.date, &mut query);
        query
    }

    /// `true` when no field other than the boolean operators holds a value.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.author.is_empty()
            && self.publisher.is_empty()
            && self.theme.is_empty()
            && self.named_entity.is_empty()
            && self.institution.is_empty()
            && self.date.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn unknown_source_is_the_only_error() {
        let err = IconographyQueryParams::new(&json!({}), "url").unwrap_err();
        assert_eq!(err, QueryParamsError::InvalidSource("url".to_string()));
        assert!(IconographyQueryParams::new(&json!(null), "form").is_ok());
        assert!(IconographyQueryParams::new(&json!("garbage"), "route").is_ok());
    }

    #[test]
    fn text_is_simplified_but_keys_are_not() {
        let params = IconographyQueryParams::from_form(&json!({
            "title": ["  Le Moniteur   de la MODE ", null, ""],
            "author": "Jules  David",
            "theme": ["Vie Parisienne ", null],
        }));
        assert_eq!(params.title, vec!["le moniteur de la mode"]);
        assert_eq!(params.author, vec!["jules david"]);
        assert_eq!(params.theme, vec!["Vie Parisienne "]);
        assert!(params.publisher.is_empty());
    }

    #[test]
    fn json_field_order_is_fixed() {
        let json = IconographyQueryParams::default().to_json();
        let keys = json.as_object().unwrap().keys().cloned().collect::<Vec<_>>();
        assert_eq!(
            keys,
            vec![
                "title",
                "author",
                "publisher",
                "theme",
                "namedEntity",
                "institution",
                "date",
                "titleBooleanOp",
                "authorBooleanOp",
                "publisherBooleanOp",
                "themeBooleanOp",
                "namedEntityBooleanOp",
                "institutionBooleanOp",
                "dateBooleanOp",
            ]
        );
    }

    #[test]
    fn json_matches_serde_shape() {
        let params = IconographyQueryParams::from_form(&json!({
            "institution": ["bnf"],
            "dateBooleanOp": "or",
        }));
        let via_serde = serde_json::to_value(&params).unwrap();
        assert_eq!(params.to_json(), via_serde);
        let back: IconographyQueryParams = serde_json::from_value(via_serde).unwrap();
        assert_eq!(back, params);
    }

    #[test]
    fn route_params_hold_only_flat_values() {
        let params = IconographyQueryParams::from_form(&json!({
            "title": ["atget"],
            "date": { "a-date-filter": "dateExact", "a-date": "1850" },
        }));
        let route = params.to_route_params();
        assert!(!route.contains_key("date"));
        assert_eq!(route.get("date.0.filter").map(|v| v.to_strings()), Some(vec!["dateExact".to_string()]));
        assert_eq!(route.get("date.0.data.0").map(|v| v.to_strings()), Some(vec!["1850".to_string()]));
        assert_eq!(route.get("title").map(|v| v.to_strings()), Some(vec!["atget".to_string()]));
    }

    #[test]
    fn deserialization_cleans_client_input() {
        let params: IconographyQueryParams =
            serde_json::from_value(json!({ "title": ["  Le MONITEUR  ", ""], "theme": [""] })).unwrap();
        assert_eq!(params.title(), ["le moniteur"]);
        assert!(params.theme().is_empty());

        let blank: IconographyQueryParams = serde_json::from_value(json!({ "title": ["", "  "], "theme": [""] })).unwrap();
        assert!(blank.is_empty());

        let back = IconographyQueryParams::from_route(&params.to_route_params());
        assert_eq!(back.to_json(), params.to_json());
    }

    #[test]
    fn deserialization_reads_wire_dates_and_fixes_ops() {
        let params: IconographyQueryParams = serde_json::from_value(json!({
            "date": [
                { "filter": "dateRange", "data": [1860, 1900] },
                { "filter": "dateRange", "data": [1900, 1860] },
            ],
            "dateBooleanOp": "or",
            "titleBooleanOp": "xor",
        }))
        .unwrap();
        assert_eq!(params.date(), [DateSpec::Range(1860, 1900)]);
        assert_eq!(params.date_boolean_op(), BooleanOp::Or);
        assert_eq!(params.title_boolean_op(), BooleanOp::And);
    }

    #[test]
    fn deserialization_fills_missing_fields() {
        let params: IconographyQueryParams = serde_json::from_value(json!({ "theme": ["mode"] })).unwrap();
        assert_eq!(params.theme, vec!["mode"]);
        assert_eq!(params.date_boolean_op, BooleanOp::And);
    }
}
