//! Errors raised while building query parameters.

#[derive(Debug, Clone, PartialEq)]
pub enum QueryParamsError {
    /// The source tag was neither `form` nor `route`.
    InvalidSource(String),
}

impl std::fmt::Display for QueryParamsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSource(from) => {
                write!(f, "invalid query parameters source: expected one of form, route, got {from:?}")
            }
        }
    }
}

impl std::error::Error for QueryParamsError {}
