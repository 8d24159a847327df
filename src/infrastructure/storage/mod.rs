use async_trait::async_trait;

mod filesystem_storage;
pub mod utils;

pub use filesystem_storage::FilesystemMediaStorage;
pub use utils::*;

use crate::domain::entities::VideoId;
use crate::domain::value_objects::{AudioVideoMedia, ImageMedia, Resource, VideoMediaType, VideoResource};

/// Error types for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {message}")]
    IoError { message: String },

    #[error("Invalid path: {path}")]
    InvalidPath { path: String },
}

impl From<std::io::Error> for StorageError {
    fn from(error: std::io::Error) -> Self {
        StorageError::IoError { message: error.to_string() }
    }
}

/// Trait for storing and serving the binary media of a video
///
/// Locations are deterministic per video and slot, so storing twice for the
/// same slot overwrites. `clear_resources` is idempotent.
#[async_trait]
pub trait MediaResourceGateway: Send + Sync {
    /// Store an encodable payload, returning its pending media value
    async fn store_audio_video(
        &self,
        video_id: &VideoId,
        resource: &VideoResource,
    ) -> Result<AudioVideoMedia, StorageError>;

    /// Store an image payload, returning its media value
    async fn store_image(
        &self,
        video_id: &VideoId,
        resource: &VideoResource,
    ) -> Result<ImageMedia, StorageError>;

    /// Fetch the payload stored for a slot, if any
    async fn get_resource(
        &self,
        video_id: &VideoId,
        media_type: VideoMediaType,
    ) -> Result<Option<Resource>, StorageError>;

    /// Remove every payload stored for a video
    async fn clear_resources(&self, video_id: &VideoId) -> Result<(), StorageError>;
}
