use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::entities::{CastMemberId, CategoryId, GenreId};
use crate::domain::validation::{DomainError, ValidationError, ValidationHandler};
use crate::domain::value_objects::{AudioVideoMedia, ImageMedia, Rating, VideoMediaType};
use crate::domain::{AggregateRoot, Identifier};

pub const TITLE_MAX_LENGTH: usize = 255;
pub const DESCRIPTION_MAX_LENGTH: usize = 4000;
pub const LAUNCH_YEAR_MIN: i32 = 1888;
pub const LAUNCH_YEAR_MAX: i32 = 2200;

/// Unique identifier for videos managed by the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VideoId(String);

impl VideoId {
    #[must_use]
    pub fn unique() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VideoId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for VideoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Identifier for VideoId {
    fn value(&self) -> &str {
        &self.0
    }
}

/// Catalog video aggregate
///
/// Owns the descriptive fields, the references to categories, genres and
/// cast members, and the five optional media slots. Reference ids are held
/// as opaque identifiers; whether they exist is checked at the application
/// boundary, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub id: VideoId,
    pub title: String,
    pub description: String,
    pub launched_at: Option<i32>,
    pub duration: f64,
    pub rating: Option<Rating>,
    pub opened: bool,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub categories: HashSet<CategoryId>,
    pub genres: HashSet<GenreId>,
    pub cast_members: HashSet<CastMemberId>,
    pub video: Option<AudioVideoMedia>,
    pub trailer: Option<AudioVideoMedia>,
    pub banner: Option<ImageMedia>,
    pub thumbnail: Option<ImageMedia>,
    pub thumbnail_half: Option<ImageMedia>,
}

impl Video {
    /// Create a new video with a fresh identity and empty media slots
    #[must_use]
    #[allow(clippy::too_many_arguments, clippy::fn_params_excessive_bools)]
    pub fn new_video(
        title: impl Into<String>,
        description: impl Into<String>,
        launched_at: Option<i32>,
        duration: f64,
        rating: Option<Rating>,
        opened: bool,
        published: bool,
        categories: HashSet<CategoryId>,
        genres: HashSet<GenreId>,
        cast_members: HashSet<CastMemberId>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: VideoId::unique(),
            title: title.into(),
            description: description.into(),
            launched_at,
            duration,
            rating,
            opened,
            published,
            created_at: now,
            updated_at: now,
            categories,
            genres,
            cast_members,
            video: None,
            trailer: None,
            banner: None,
            thumbnail: None,
            thumbnail_half: None,
        }
    }

    /// Replace the descriptive fields and reference sets
    ///
    /// Identity, creation time and media slots are untouched.
    #[allow(clippy::too_many_arguments, clippy::fn_params_excessive_bools)]
    pub fn update(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        launched_at: Option<i32>,
        duration: f64,
        rating: Option<Rating>,
        opened: bool,
        published: bool,
        categories: HashSet<CategoryId>,
        genres: HashSet<GenreId>,
        cast_members: HashSet<CastMemberId>,
    ) {
        self.title = title.into();
        self.description = description.into();
        self.launched_at = launched_at;
        self.duration = duration;
        self.rating = rating;
        self.opened = opened;
        self.published = published;
        self.categories = categories;
        self.genres = genres;
        self.cast_members = cast_members;
        self.updated_at = Utc::now();
    }

    pub fn set_video(&mut self, media: Option<AudioVideoMedia>) {
        self.video = media;
        self.updated_at = Utc::now();
    }

    pub fn set_trailer(&mut self, media: Option<AudioVideoMedia>) {
        self.trailer = media;
        self.updated_at = Utc::now();
    }

    pub fn set_banner(&mut self, media: Option<ImageMedia>) {
        self.banner = media;
        self.updated_at = Utc::now();
    }

    pub fn set_thumbnail(&mut self, media: Option<ImageMedia>) {
        self.thumbnail = media;
        self.updated_at = Utc::now();
    }

    pub fn set_thumbnail_half(&mut self, media: Option<ImageMedia>) {
        self.thumbnail_half = media;
        self.updated_at = Utc::now();
    }

    /// Mark the media in an audio/video slot as picked up by the encoder
    ///
    /// Image slots and empty slots are left untouched.
    pub fn processing(&mut self, media_type: VideoMediaType) {
        match media_type {
            VideoMediaType::Video => {
                if let Some(media) = self.video.take() {
                    self.set_video(Some(media.processing()));
                }
            }
            VideoMediaType::Trailer => {
                if let Some(media) = self.trailer.take() {
                    self.set_trailer(Some(media.processing()));
                }
            }
            _ => {}
        }
    }

    /// Mark the media in an audio/video slot as encoded at `encoded_location`
    pub fn completed(&mut self, media_type: VideoMediaType, encoded_location: &str) {
        match media_type {
            VideoMediaType::Video => {
                if let Some(media) = self.video.take() {
                    self.set_video(Some(media.completed(encoded_location)));
                }
            }
            VideoMediaType::Trailer => {
                if let Some(media) = self.trailer.take() {
                    self.set_trailer(Some(media.completed(encoded_location)));
                }
            }
            _ => {}
        }
    }
}

impl AggregateRoot for Video {
    type Id = VideoId;

    fn id(&self) -> &VideoId {
        &self.id
    }

    fn validate<H: ValidationHandler>(&self, handler: &mut H) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            handler.append(ValidationError::new("'title' should not be empty"))?;
        } else if self.title.chars().count() > TITLE_MAX_LENGTH {
            handler.append(ValidationError::new(
                "'title' must be between 1 and 255 characters",
            ))?;
        }

        if self.description.trim().is_empty() {
            handler.append(ValidationError::new("'description' should not be empty"))?;
        } else if self.description.chars().count() > DESCRIPTION_MAX_LENGTH {
            handler.append(ValidationError::new(
                "'description' must be between 1 and 4000 characters",
            ))?;
        }

        if self.duration < 0.0 {
            handler.append(ValidationError::new("'duration' should not be negative"))?;
        }

        if let Some(year) = self.launched_at {
            if !(LAUNCH_YEAR_MIN..=LAUNCH_YEAR_MAX).contains(&year) {
                handler.append(ValidationError::new("'launched_at' must be a valid year"))?;
            }
        }

        if self.rating.is_none() {
            handler.append(ValidationError::new("'rating' should not be empty"))?;
        }

        Ok(())
    }
}
