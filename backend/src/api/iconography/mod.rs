//! Iconography endpoints and module exports.

mod search_iconography;
pub use search_iconography::search_iconography;

mod overall_date_range;
pub use overall_date_range::iconography_overall_date_range;
