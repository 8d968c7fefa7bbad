//! Editable state of the advanced search form, and the payload it submits.

use std::collections::BTreeMap;

use common::iconography_query::{BooleanOp, DateFilterKind, DateSpec, IconographyQueryParams, QueryParamsError};
use common::search_const::{DATE_FILTER_KEY_SUFFIX, DATE_VALUE_KEY_SUFFIX};
use common::validation::{AllowedDateRange, validate_date, validate_date_range, validate_text_list};
use serde_json::{Map, Value};

use crate::data_definitions::search_field::SearchField;

/// One repeatable date block. `id` is generated per block and prefixes
/// every key the block writes into the payload.
#[derive(Debug, Clone, PartialEq)]
pub struct DateBlockState {
    pub id: String,
    pub filter: DateFilterKind,
    pub date: String,
    pub date_start: String,
    pub date_end: String,
}

impl DateBlockState {
    pub fn new() -> Self {
        Self::with_id(uuid::Uuid::new_v4().simple().to_string())
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            filter: DateFilterKind::Exact,
            date: String::new(),
            date_start: String::new(),
            date_end: String::new(),
        }
    }

    pub fn from_spec(spec: &DateSpec) -> Self {
        let mut block = Self::new();
        block.filter = spec.kind();
        match *spec {
            DateSpec::Range(start, end) => {
                block.date_start = start.to_string();
                block.date_end = end.to_string();
            }
            DateSpec::Exact(year) | DateSpec::Before(year) | DateSpec::After(year) => {
                block.date = year.to_string();
            }
        }
        block
    }

    pub fn is_valid(&self, allowed: &AllowedDateRange) -> bool {
        match self.filter {
            DateFilterKind::Range => validate_date_range(&self.date_start, &self.date_end, allowed),
            _ => validate_date(&self.date, allowed),
        }
    }

    fn payload_value(&self) -> Value {
        match self.filter {
            DateFilterKind::Range => {
                let mut range = Map::new();
                range.insert(format!("{}{DATE_VALUE_KEY_SUFFIX}-dateStart", self.id), Value::from(self.date_start.as_str()));
                range.insert(format!("{}{DATE_VALUE_KEY_SUFFIX}-dateEnd", self.id), Value::from(self.date_end.as_str()));
                Value::Object(range)
            }
            _ => Value::from(self.date.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdvancedSearchFormState {
    values: BTreeMap<SearchField, Vec<String>>,
    ops: BTreeMap<SearchField, BooleanOp>,
    pub date: Vec<DateBlockState>,
}

impl AdvancedSearchFormState {
    /// Pre-fill the form from the current query. Every text field shows at
    /// least one input.
    pub fn from_query(query: &IconographyQueryParams) -> Self {
        let mut state = Self::default();
        for field in SearchField::TEXT_FIELDS {
            let mut values = field.values(query).to_vec();
            if values.is_empty() {
                values.push(String::new());
            }
            state.values.insert(field, values);
        }
        for field in SearchField::ALL {
            state.ops.insert(field, field.op(query));
        }
        state.date = query.date().iter().map(DateBlockState::from_spec).collect();
        state
    }

    pub fn values(&self, field: SearchField) -> Vec<String> {
        self.values.get(&field).cloned().unwrap_or_default()
    }

    pub fn set_value(&mut self, field: SearchField, index: usize, value: String) {
        let values = self.values.entry(field).or_default();
        if index < values.len() {
            values[index] = value;
        } else {
            values.push(value);
        }
    }

    pub fn push_value(&mut self, field: SearchField) {
        self.values.entry(field).or_default().push(String::new());
    }

    pub fn remove_value(&mut self, field: SearchField, index: usize) {
        let values = self.values.entry(field).or_default();
        if index < values.len() {
            values.remove(index);
        }
        if values.is_empty() {
            values.push(String::new());
        }
    }

    pub fn op(&self, field: SearchField) -> BooleanOp {
        self.ops.get(&field).copied().unwrap_or_default()
    }

    pub fn set_op(&mut self, field: SearchField, op: BooleanOp) {
        self.ops.insert(field, op);
    }

    pub fn add_date_block(&mut self) {
        self.date.push(DateBlockState::new());
    }

    pub fn remove_date_block(&mut self, id: &str) {
        self.date.retain(|block| block.id != id);
    }

    pub fn update_date_block(&mut self, id: &str, update: impl FnOnce(&mut DateBlockState)) {
        if let Some(block) = self.date.iter_mut().find(|block| block.id == id) {
            update(block);
        }
    }

    pub fn is_field_valid(&self, field: SearchField) -> bool {
        !field.is_free_text() || validate_text_list(&self.values(field))
    }

    pub fn is_valid(&self, allowed: &AllowedDateRange) -> bool {
        SearchField::TEXT_FIELDS.into_iter().all(|field| self.is_field_valid(field))
            && self.date.iter().all(|block| block.is_valid(allowed))
    }

    /// The nested payload the normalizer reads with the `form` source.
    pub fn to_form_payload(&self) -> Value {
        let mut payload = Map::new();
        for field in SearchField::TEXT_FIELDS {
            payload.insert(field.key().to_string(), Value::from(self.values(field)));
        }
        let mut date = Map::new();
        for block in self.date.iter() {
            date.insert(format!("{}{DATE_FILTER_KEY_SUFFIX}", block.id), Value::from(block.filter.as_str()));
            date.insert(format!("{}{DATE_VALUE_KEY_SUFFIX}", block.id), block.payload_value());
        }
        payload.insert(SearchField::Date.key().to_string(), Value::Object(date));
        for field in SearchField::ALL {
            payload.insert(field.op_key(), Value::from(self.op(field).as_str()));
        }
        Value::Object(payload)
    }

    pub fn to_query(&self) -> Result<IconographyQueryParams, QueryParamsError> {
        IconographyQueryParams::new(&self.to_form_payload(), "form")
    }
}
