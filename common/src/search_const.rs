//! Constants shared by the search form, the normalizer and the backend.

/// Default bounds of the years a date filter may hold, used until the
/// dataset's own date range is known.
pub const DEFAULT_ALLOWED_DATE_RANGE: (i32, i32) = (1700, 2100);

/// Free-text inputs shorter than this are rejected by the search form.
pub const MIN_TEXT_LENGTH: usize = 3;

/// Suffix of the form key holding a date block's filter kind.
pub const DATE_FILTER_KEY_SUFFIX: &str = "-date-filter";
/// Suffix of the form key holding a date block's value.
pub const DATE_VALUE_KEY_SUFFIX: &str = "-date";
/// Suffix of the range sub-field holding the first year.
pub const DATE_RANGE_START_SUFFIX: &str = "dateStart";
/// Suffix of the range sub-field holding the second year.
pub const DATE_RANGE_END_SUFFIX: &str = "dateEnd";

/// Prefix of the dotted route keys carrying the date filters.
pub const DATE_ROUTE_KEY: &str = "date";
/// Route key of the pre-dotted URL revision (single date filter).
pub const LEGACY_DATE_FILTER_ROUTE_KEY: &str = "dateFilter";
