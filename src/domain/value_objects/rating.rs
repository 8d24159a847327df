use serde::{Deserialize, Serialize};
use std::fmt;

/// Content rating classification for a catalog video
///
/// Labels follow the public classification scheme: `ER` (special content),
/// `L` (free for all audiences) and age brackets from 10 to 18.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    Er,
    L,
    Age10,
    Age12,
    Age14,
    Age16,
    Age18,
}

impl Rating {
    /// Parse a rating from its public label, case-insensitively
    ///
    /// Returns `None` for unknown labels so callers can accumulate a
    /// validation error instead of aborting.
    #[must_use]
    pub fn of(label: &str) -> Option<Self> {
        match label.to_uppercase().as_str() {
            "ER" => Some(Self::Er),
            "L" => Some(Self::L),
            "10" => Some(Self::Age10),
            "12" => Some(Self::Age12),
            "14" => Some(Self::Age14),
            "16" => Some(Self::Age16),
            "18" => Some(Self::Age18),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Er => "ER",
            Self::L => "L",
            Self::Age10 => "10",
            Self::Age12 => "12",
            Self::Age14 => "14",
            Self::Age16 => "16",
            Self::Age18 => "18",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
