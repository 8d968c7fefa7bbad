//! Plain data types used by the components.

pub mod advanced_search_form_state;
pub mod search_field;
