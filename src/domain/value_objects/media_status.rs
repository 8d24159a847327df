use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Processing status of an audio/video media asset
///
/// `Pending` is the only valid initial value. Transitions move forward only;
/// a completed asset never regresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MediaStatus {
    /// Raw upload stored, waiting for the encoder to pick it up
    Pending,
    /// Encoder reported work in progress
    Processing,
    /// Encoding finished, encoded location is known
    Completed,
}

impl MediaStatus {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    #[must_use]
    pub fn is_processing(&self) -> bool {
        matches!(self, Self::Processing)
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for MediaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Processing => write!(f, "PROCESSING"),
            Self::Completed => write!(f, "COMPLETED"),
        }
    }
}

impl FromStr for MediaStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "PROCESSING" => Ok(Self::Processing),
            "COMPLETED" => Ok(Self::Completed),
            _ => Err(format!("Invalid media status: {s}")),
        }
    }
}
