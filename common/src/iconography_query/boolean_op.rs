//! Boolean operator applied between the values of one field.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::raw_field::RawField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BooleanOp {
    #[default]
    And,
    Or,
    Not,
}

impl BooleanOp {
    pub const ALL: [BooleanOp; 3] = [BooleanOp::And, BooleanOp::Or, BooleanOp::Not];

    pub fn as_str(&self) -> &'static str {
        match self {
            BooleanOp::And => "and",
            BooleanOp::Or => "or",
            BooleanOp::Not => "not",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == s)
    }

    /// Read an operator from user input. Anything that is not exactly
    /// `and`, `or` or `not` falls back to `and`.
    pub(crate) fn from_raw(field: &RawField) -> Self {
        match field {
            RawField::Missing => Self::default(),
            RawField::Text(s) => Self::parse(s).unwrap_or_else(|| {
                tracing::debug!("unknown boolean operator {s:?}, using \"and\"");
                Self::default()
            }),
            other => {
                tracing::debug!("boolean operator is not a string ({other:?}), using \"and\"");
                Self::default()
            }
        }
    }
}

impl Display for BooleanOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BooleanOp::And => "et",
            BooleanOp::Or => "ou",
            BooleanOp::Not => "sauf",
        };
        write!(f, "{label}")
    }
}
