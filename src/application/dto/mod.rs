use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::domain::entities::Video;
use crate::domain::value_objects::{MediaStatus, Resource};

/// Raw binary payloads for the five media slots of a video
///
/// Absent slots are left untouched by the orchestrators.
#[derive(Debug, Clone, Default)]
pub struct VideoResources {
    pub video: Option<Resource>,
    pub trailer: Option<Resource>,
    pub banner: Option<Resource>,
    pub thumbnail: Option<Resource>,
    pub thumbnail_half: Option<Resource>,
}

/// Command for creating a new video
///
/// Reference ids and the rating arrive as raw strings from the outer edge;
/// parsing failures surface as validation errors, not transport errors.
#[derive(Debug, Clone, Default)]
pub struct CreateVideoCommand {
    pub title: String,
    pub description: String,
    pub launched_at: Option<i32>,
    pub duration: f64,
    pub rating: Option<String>,
    pub opened: bool,
    pub published: bool,
    pub categories: Vec<String>,
    pub genres: Vec<String>,
    pub cast_members: Vec<String>,
    pub resources: VideoResources,
}

/// Response for a successful video creation
#[derive(Debug, Clone, Serialize)]
pub struct CreateVideoOutput {
    pub id: String,
}

impl From<&Video> for CreateVideoOutput {
    fn from(video: &Video) -> Self {
        Self { id: video.id.to_string() }
    }
}

/// Command for updating an existing video
#[derive(Debug, Clone, Default)]
pub struct UpdateVideoCommand {
    pub id: String,
    pub title: String,
    pub description: String,
    pub launched_at: Option<i32>,
    pub duration: f64,
    pub rating: Option<String>,
    pub opened: bool,
    pub published: bool,
    pub categories: Vec<String>,
    pub genres: Vec<String>,
    pub cast_members: Vec<String>,
    pub resources: VideoResources,
}

/// Response for a successful video update
#[derive(Debug, Clone, Serialize)]
pub struct UpdateVideoOutput {
    pub id: String,
}

impl From<&Video> for UpdateVideoOutput {
    fn from(video: &Video) -> Self {
        Self { id: video.id.to_string() }
    }
}

/// Command for deleting a video
#[derive(Debug, Clone)]
pub struct DeleteVideoCommand {
    pub id: String,
}

/// Status message emitted by the external encoder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMediaStatusCommand {
    pub status: MediaStatus,
    pub video_id: String,
    pub resource_id: String,
    pub folder: String,
    pub filename: String,
}

/// Request for fetching a stored media binary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetMediaCommand {
    pub video_id: String,
    pub media_type: String,
}

/// A stored media binary ready to be served
#[derive(Debug, Clone)]
pub struct MediaOutput {
    pub name: String,
    pub content_type: String,
    pub content: Bytes,
}

impl From<Resource> for MediaOutput {
    fn from(resource: Resource) -> Self {
        Self {
            name: resource.name().to_string(),
            content_type: resource.content_type().to_string(),
            content: resource.content().clone(),
        }
    }
}
