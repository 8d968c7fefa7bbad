//! API calls exposed to the frontend server functions.

pub mod iconography;
