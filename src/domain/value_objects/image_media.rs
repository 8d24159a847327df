use super::Checksum;
use serde::{Deserialize, Serialize};

/// Static image attached to a video, such as a banner or thumbnail
///
/// Images have no processing lifecycle; they are stored once and referenced
/// by location. Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageMedia {
    checksum: Checksum,
    name: String,
    location: String,
}

impl ImageMedia {
    #[must_use]
    pub fn with(checksum: Checksum, name: impl Into<String>, location: impl Into<String>) -> Self {
        Self { checksum, name: name.into(), location: location.into() }
    }

    #[must_use]
    pub fn checksum(&self) -> &Checksum {
        &self.checksum
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }
}
