//! Server-side calls to the Richelieu JSON API.

pub mod api;
pub mod api_utils;
