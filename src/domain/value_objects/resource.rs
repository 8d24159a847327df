use super::Checksum;
use bytes::Bytes;
use std::fmt;

/// Raw binary payload handed to the media pipeline
///
/// The checksum is computed from the content at construction time, so it is
/// always consistent with the bytes carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    content: Bytes,
    checksum: Checksum,
    content_type: String,
    name: String,
}

impl Resource {
    #[must_use]
    pub fn of(content: Bytes, content_type: impl Into<String>, name: impl Into<String>) -> Self {
        let checksum = Checksum::from_bytes(&content);
        Self { content, checksum, content_type: content_type.into(), name: name.into() }
    }

    #[must_use]
    pub fn content(&self) -> &Bytes {
        &self.content
    }

    #[must_use]
    pub fn checksum(&self) -> &Checksum {
        &self.checksum
    }

    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The five media slots a video carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VideoMediaType {
    Video,
    Trailer,
    Banner,
    Thumbnail,
    ThumbnailHalf,
}

impl VideoMediaType {
    /// Parse a slot from its wire label, case-insensitively
    #[must_use]
    pub fn of(label: &str) -> Option<Self> {
        match label.to_uppercase().as_str() {
            "VIDEO" => Some(Self::Video),
            "TRAILER" => Some(Self::Trailer),
            "BANNER" => Some(Self::Banner),
            "THUMBNAIL" => Some(Self::Thumbnail),
            "THUMBNAIL_HALF" => Some(Self::ThumbnailHalf),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Video => "VIDEO",
            Self::Trailer => "TRAILER",
            Self::Banner => "BANNER",
            Self::Thumbnail => "THUMBNAIL",
            Self::ThumbnailHalf => "THUMBNAIL_HALF",
        }
    }

    /// Whether this slot holds encodable audio/video rather than an image
    #[must_use]
    pub fn is_audio_video(&self) -> bool {
        matches!(self, Self::Video | Self::Trailer)
    }
}

impl fmt::Display for VideoMediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A payload paired with the slot it should land in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoResource {
    resource: Resource,
    media_type: VideoMediaType,
}

impl VideoResource {
    #[must_use]
    pub fn with(resource: Resource, media_type: VideoMediaType) -> Self {
        Self { resource, media_type }
    }

    #[must_use]
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    #[must_use]
    pub fn media_type(&self) -> VideoMediaType {
        self.media_type
    }
}
