//! Critical classification
//!
//! A die is a critical success when it lands on its highest face and a
//! critical failure when it lands on 1, for every die size. Display code
//! should take its badge text from [`Critical::badge`] so the sheet and the
//! engine agree on what counts as a crit.

use crate::types::DieFace;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Critical state of a single die
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Critical {
    Success,
    Failure,
    None,
}

impl Critical {
    /// Badge text shown next to a critical die
    pub fn badge(&self) -> Option<&'static str> {
        match self {
            Critical::Success => Some("CRIT SUCCESS"),
            Critical::Failure => Some("CRIT FAIL"),
            Critical::None => None,
        }
    }

    pub fn is_critical(&self) -> bool {
        !matches!(self, Critical::None)
    }
}

impl fmt::Display for Critical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Critical::Success => write!(f, "success"),
            Critical::Failure => write!(f, "failure"),
            Critical::None => write!(f, "none"),
        }
    }
}

/// Classify a face against its own die size.
///
/// A one-sided die satisfies both conditions; success wins.
pub fn classify(face: &DieFace) -> Critical {
    if face.value == face.sides {
        Critical::Success
    } else if face.value == 1 {
        Critical::Failure
    } else {
        Critical::None
    }
}
