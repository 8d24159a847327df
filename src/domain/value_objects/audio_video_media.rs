use super::{Checksum, MediaStatus};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Encodable media attached to a video, such as the main file or a trailer
///
/// Identity is the content checksum, so two values with the same id compare
/// equal regardless of location or status. Status moves forward only:
/// `Pending` to `Processing` to `Completed`, with `completed` idempotent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioVideoMedia {
    id: String,
    checksum: Checksum,
    name: String,
    raw_location: String,
    encoded_location: String,
    status: MediaStatus,
}

impl AudioVideoMedia {
    /// Create a freshly uploaded media in `Pending` state
    #[must_use]
    pub fn with(checksum: Checksum, name: impl Into<String>, raw_location: impl Into<String>) -> Self {
        Self {
            id: checksum.as_str().to_string(),
            checksum,
            name: name.into(),
            raw_location: raw_location.into(),
            encoded_location: String::new(),
            status: MediaStatus::Pending,
        }
    }

    /// Rehydrate a media value from persisted fields
    #[must_use]
    pub fn restore(
        id: impl Into<String>,
        checksum: Checksum,
        name: impl Into<String>,
        raw_location: impl Into<String>,
        encoded_location: impl Into<String>,
        status: MediaStatus,
    ) -> Self {
        Self {
            id: id.into(),
            checksum,
            name: name.into(),
            raw_location: raw_location.into(),
            encoded_location: encoded_location.into(),
            status,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
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
    pub fn raw_location(&self) -> &str {
        &self.raw_location
    }

    #[must_use]
    pub fn encoded_location(&self) -> &str {
        &self.encoded_location
    }

    #[must_use]
    pub fn status(&self) -> MediaStatus {
        self.status
    }

    /// Mark the media as picked up by the encoder
    ///
    /// Only a `Pending` media moves to `Processing`; any later state is
    /// returned unchanged.
    #[must_use]
    pub fn processing(self) -> Self {
        if self.status.is_pending() {
            Self { status: MediaStatus::Processing, ..self }
        } else {
            self
        }
    }

    /// Mark the media as fully encoded at `encoded_location`
    ///
    /// A media already `Completed` keeps its original encoded location.
    #[must_use]
    pub fn completed(self, encoded_location: impl Into<String>) -> Self {
        if self.status.is_completed() {
            self
        } else {
            Self {
                status: MediaStatus::Completed,
                encoded_location: encoded_location.into(),
                ..self
            }
        }
    }
}

impl PartialEq for AudioVideoMedia {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for AudioVideoMedia {}

impl Hash for AudioVideoMedia {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
