//! Behaviour of the iconography query parameters across the form, the
//! canonical JSON and the route query.

use common::iconography_query::{BooleanOp, DateSpec, IconographyQueryParams};
use common::route_query::RouteQuery;
use pretty_assertions::assert_eq;
use serde_json::json;

fn full_form_payload() -> serde_json::Value {
    json!({
        "title": ["  Le Moniteur de la  Mode", ""],
        "author": ["Jules DAVID", null],
        "publisher": "Goupil",
        "theme": ["actualité", "vie parisienne"],
        "namedEntity": ["Bourse"],
        "institution": "bnf",
        "date": {
            "u1-date-filter": "dateRange",
            "u1-date": { "u1-dateStart": "1860", "u1-dateEnd": "1900" },
            "u2-date-filter": "dateBefore",
            "u2-date": "1850",
        },
        "titleBooleanOp": "or",
        "authorBooleanOp": "not",
        "publisherBooleanOp": "and",
        "themeBooleanOp": "or",
        "namedEntityBooleanOp": "xor",
        "dateBooleanOp": "not",
    })
}

#[test]
fn route_round_trip_is_symmetric() {
    let params = IconographyQueryParams::from_form(&full_form_payload());
    let back = IconographyQueryParams::from_route(&params.to_route_params());
    assert_eq!(back.to_json(), params.to_json());
    assert_eq!(back, params);
}

#[test]
fn url_round_trip_is_symmetric() {
    let params = IconographyQueryParams::from_form(&full_form_payload());
    let url = params.to_route_params().to_query_string();
    let back = IconographyQueryParams::from_route(&RouteQuery::parse(&url));
    assert_eq!(back, params);
}

#[test]
fn round_trip_of_empty_params() {
    let params = IconographyQueryParams::from_form(&json!({}));
    let url = params.to_route_params().to_string();
    let back = IconographyQueryParams::from_route(&RouteQuery::from(url.as_str()));
    assert_eq!(back, params);
}

#[test]
fn route_source_tag_reads_flat_json() {
    let params = IconographyQueryParams::from_form(&full_form_payload());
    let flat = params.to_route_params().to_json();
    let back = IconographyQueryParams::new(&flat, "route").unwrap();
    assert_eq!(back, params);
}

#[test]
fn cleaning_is_idempotent() {
    let params = IconographyQueryParams::from_form(&json!({ "author": ["atget"] }));
    assert_eq!(params.author(), vec!["atget"]);
    let again = IconographyQueryParams::from_form(&params.to_json());
    assert_eq!(again.author(), vec!["atget"]);
}

#[test]
fn unknown_boolean_op_falls_back_to_and() {
    let params = IconographyQueryParams::new(&json!({ "titleBooleanOp": "xor" }), "form").unwrap();
    assert_eq!(params.title_boolean_op(), BooleanOp::And);
    assert_eq!(params.to_json()["titleBooleanOp"], json!("and"));
}

#[test]
fn empty_detection() {
    assert!(IconographyQueryParams::from_form(&json!({})).is_empty());
    assert!(IconographyQueryParams::from_form(&json!({ "titleBooleanOp": "or", "title": ["", null] })).is_empty());
    assert!(!IconographyQueryParams::from_form(&json!({ "theme": ["actualité"] })).is_empty());
}

#[test]
fn date_blocks_are_extracted() {
    let params = IconographyQueryParams::from_form(&json!({
        "date": {
            "u1-date-filter": "dateRange",
            "u1-date": { "u1-dateStart": "1860", "u1-dateEnd": "1900" },
            "u2-date-filter": "dateBefore",
            "u2-date": "1850",
            "u3-date-filter": "dateAfter",
            "u3-date": "",
        }
    }));
    assert_eq!(params.date(), vec![DateSpec::Range(1860, 1900), DateSpec::Before(1850)]);
    assert_eq!(
        params.to_json()["date"],
        json!([
            { "filter": "dateRange", "data": [1860, 1900] },
            { "filter": "dateBefore", "data": [1850] },
        ])
    );
}

#[test]
fn scalar_route_values_become_lists() {
    let params = IconographyQueryParams::from_route(&RouteQuery::parse("theme=mode&title=La%20BOURSE"));
    assert_eq!(params.theme(), vec!["mode"]);
    assert_eq!(params.title(), vec!["la bourse"]);

    let from_json = IconographyQueryParams::new(&json!({ "theme": "mode" }), "route").unwrap();
    assert_eq!(from_json.theme(), vec!["mode"]);
}

#[test]
fn both_sources_expose_the_same_types() {
    let from_form = IconographyQueryParams::from_form(&json!({ "theme": "mode", "date": {} }));
    let from_route = IconographyQueryParams::from_route(&RouteQuery::parse("theme=mode"));
    assert_eq!(from_form.to_json(), from_route.to_json());
}

#[test]
fn legacy_url_is_still_readable() {
    let params = IconographyQueryParams::from_route(&RouteQuery::parse(
        "dateFilter=dateRange&date=1860&date=1900&institution=bnf",
    ));
    assert_eq!(params.date(), vec![DateSpec::Range(1860, 1900)]);
    assert_eq!(params.institution(), vec!["bnf"]);
    // written back with the current revision
    assert!(params.to_route_params().contains_key("date.0.filter"));
    assert!(!params.to_route_params().contains_key("dateFilter"));
}

#[test]
fn hand_edited_urls_never_fail() {
    let params = IconographyQueryParams::from_route(&RouteQuery::parse(
        "date.0.filter=dateRange&date.0.data.0=1900&date.0.data.1=1860&date.1.filter=dateExact&date.1.data.0=1850&authorBooleanOp=maybe&&=&title",
    ));
    assert_eq!(params.date(), vec![DateSpec::Exact(1850)]);
    assert_eq!(params.author_boolean_op(), BooleanOp::And);
    assert!(params.title().is_empty());
}

#[test]
fn invalid_source_is_reported() {
    let err = IconographyQueryParams::new(&json!({}), "json").unwrap_err();
    assert!(err.to_string().contains("\"json\""));
}

#[test]
fn deserialized_params_are_cleaned_like_the_other_sources() {
    let from_client: IconographyQueryParams = serde_json::from_value(json!({
        "title": ["  Le MONITEUR  ", ""],
        "theme": [""],
        "namedEntityBooleanOp": ["or"],
    }))
    .unwrap();
    let from_form = IconographyQueryParams::from_form(&json!({ "title": ["  Le MONITEUR  ", ""], "theme": [""] }));
    assert_eq!(from_client, from_form);

    let blank: IconographyQueryParams = serde_json::from_value(json!({ "title": ["", "   "], "theme": [""] })).unwrap();
    assert!(blank.is_empty());
}

#[test]
fn serde_round_trip_keeps_every_field() {
    let params = IconographyQueryParams::from_form(&full_form_payload());
    let back: IconographyQueryParams = serde_json::from_str(&serde_json::to_string(&params).unwrap()).unwrap();
    assert_eq!(back, params);
}
