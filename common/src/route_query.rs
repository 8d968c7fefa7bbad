//! Flat key/value query codec.
//!
//! The router can only carry flat values in a URL: strings, numbers and
//! lists of strings. [`RouteQuery`] is that flat shape, with a codec to
//! and from a URL query string and to and from a flat JSON object.

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RouteValue {
    Number(i64),
    Text(String),
    List(Vec<String>),
}

impl RouteValue {
    /// All values carried, as strings. A scalar yields a single item.
    pub fn to_strings(&self) -> Vec<String> {
        match self {
            RouteValue::Number(n) => vec![n.to_string()],
            RouteValue::Text(s) => vec![s.clone()],
            RouteValue::List(items) => items.clone(),
        }
    }

    fn to_json(&self) -> Value {
        match self {
            RouteValue::Number(n) => Value::from(*n),
            RouteValue::Text(s) => Value::from(s.as_str()),
            RouteValue::List(items) => Value::from(items.clone()),
        }
    }

    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(RouteValue::Text(s.clone())),
            Value::Number(n) => Some(match n.as_i64() {
                Some(i) => RouteValue::Number(i),
                None => RouteValue::Text(n.to_string()),
            }),
            Value::Bool(b) => Some(RouteValue::Text(b.to_string())),
            Value::Array(items) => Some(RouteValue::List(
                items
                    .iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s.clone()),
                        Value::Number(n) => Some(n.to_string()),
                        Value::Bool(b) => Some(b.to_string()),
                        _ => None,
                    })
                    .collect(),
            )),
            Value::Null | Value::Object(_) => None,
        }
    }
}

impl From<&str> for RouteValue {
    fn from(value: &str) -> Self {
        RouteValue::Text(value.to_string())
    }
}

impl From<String> for RouteValue {
    fn from(value: String) -> Self {
        RouteValue::Text(value)
    }
}

impl From<i64> for RouteValue {
    fn from(value: i64) -> Self {
        RouteValue::Number(value)
    }
}

impl From<Vec<String>> for RouteValue {
    fn from(value: Vec<String>) -> Self {
        RouteValue::List(value)
    }
}

/// A URL query, as parsed by the router.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteQuery(BTreeMap<String, RouteValue>);

impl RouteQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&RouteValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RouteValue>) -> Option<RouteValue> {
        self.0.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<RouteValue> {
        self.0.remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &RouteValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Add a value for `key`. A key seen several times becomes a list,
    /// the way repeated query keys are read by the router.
    pub fn append(&mut self, key: impl Into<String>, value: String) {
        let key = key.into();
        let merged = match self.0.remove(&key) {
            None => RouteValue::Text(value),
            Some(previous) => {
                let mut items = previous.to_strings();
                items.push(value);
                RouteValue::List(items)
            }
        };
        self.0.insert(key, merged);
    }

    /// Parse a URL query string. A leading `?` is ignored, `+` reads as a
    /// space and pairs that are not valid percent-encoded utf-8 are skipped.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut out = Self::new();
        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let (Some(key), Some(value)) = (decode_component(key), decode_component(value)) else {
                continue;
            };
            out.append(key, value);
        }
        out
    }

    /// Write the query as a URL query string, without the leading `?`.
    /// Lists are written as repeated keys; an empty list writes nothing.
    pub fn to_query_string(&self) -> String {
        let mut pairs = Vec::new();
        for (key, value) in self.0.iter() {
            let key = urlencoding::encode(key);
            match value {
                RouteValue::Number(n) => pairs.push(format!("{key}={n}")),
                RouteValue::Text(s) => pairs.push(format!("{key}={}", urlencoding::encode(s))),
                RouteValue::List(items) => {
                    pairs.extend(items.iter().map(|s| format!("{key}={}", urlencoding::encode(s))));
                }
            }
        }
        pairs.join("&")
    }

    /// Read a flat JSON object. Nulls and nested objects are ignored, as is
    /// anything that is not an object.
    pub fn from_json(value: &Value) -> Self {
        let mut out = Self::new();
        if let Value::Object(map) = value {
            for (key, value) in map.iter() {
                if let Some(value) = RouteValue::from_json(value) {
                    out.0.insert(key.clone(), value);
                }
            }
        }
        out
    }

    pub fn to_json(&self) -> Value {
        Value::Object(self.0.iter().map(|(key, value)| (key.clone(), value.to_json())).collect())
    }
}

fn decode_component(s: &str) -> Option<String> {
    urlencoding::decode(&s.replace('+', " ")).ok().map(|decoded| decoded.into_owned())
}

// used by the router to write the query segment of a route
impl Display for RouteQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_query_string())
    }
}

// used by the router to read the query segment of a route
impl From<&str> for RouteQuery {
    fn from(query: &str) -> Self {
        RouteQuery::parse(query)
    }
}

impl FromIterator<(String, RouteValue)> for RouteQuery {
    fn from_iter<I: IntoIterator<Item = (String, RouteValue)>>(iter: I) -> Self {
        RouteQuery(iter.into_iter().collect())
    }
}
