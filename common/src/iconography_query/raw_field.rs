//! Boundary representation of untrusted input values.

use serde_json::Value;

use crate::route_query::RouteValue;

/// One value as it arrives from a form payload or a route query, before
/// any cleaning. Numbers and booleans are read as text.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawField {
    #[default]
    Missing,
    Null,
    Text(String),
    List(Vec<RawField>),
    Map(Vec<(String, RawField)>),
}

impl RawField {
    /// Wrap a scalar into a one-item list. A missing value is an empty list.
    pub fn into_list(self) -> Vec<RawField> {
        match self {
            RawField::Missing => vec![],
            RawField::List(items) => items,
            other => vec![other],
        }
    }

    /// `true` for a missing value, a null or a blank string.
    pub fn is_empty_scalar(&self) -> bool {
        match self {
            RawField::Missing | RawField::Null => true,
            RawField::Text(s) => s.trim().is_empty(),
            RawField::List(_) | RawField::Map(_) => false,
        }
    }

    /// `true` when the value holds no data at all, at any depth.
    pub fn is_blank(&self) -> bool {
        match self {
            RawField::List(items) => items.iter().all(RawField::is_blank),
            RawField::Map(entries) => entries.iter().all(|(_, value)| value.is_blank()),
            scalar => scalar.is_empty_scalar(),
        }
    }

    /// The non-blank strings of the value, after list coercion. Nested
    /// lists and maps are not strings and are dropped.
    pub fn into_texts(self) -> Vec<String> {
        self.into_list()
            .into_iter()
            .filter_map(|item| match item {
                RawField::Text(s) if !s.trim().is_empty() => Some(s),
                _ => None,
            })
            .collect()
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawField::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl From<&Value> for RawField {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => RawField::Null,
            Value::Bool(b) => RawField::Text(b.to_string()),
            Value::Number(n) => RawField::Text(n.to_string()),
            Value::String(s) => RawField::Text(s.clone()),
            Value::Array(items) => RawField::List(items.iter().map(RawField::from).collect()),
            Value::Object(map) => RawField::Map(map.iter().map(|(k, v)| (k.clone(), RawField::from(v))).collect()),
        }
    }
}

impl From<&RouteValue> for RawField {
    fn from(value: &RouteValue) -> Self {
        match value {
            RouteValue::Number(n) => RawField::Text(n.to_string()),
            RouteValue::Text(s) => RawField::Text(s.clone()),
            RouteValue::List(items) => RawField::List(items.iter().cloned().map(RawField::Text).collect()),
        }
    }
}
