//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod iconography;
pub mod iconography_query;
pub mod route_query;
pub mod search_const;
pub mod strings;
pub mod validation;
