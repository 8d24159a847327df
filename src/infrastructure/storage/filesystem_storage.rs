use async_trait::async_trait;
use bytes::Bytes;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use super::{
    utils::{detect_content_type, storage_filename, storage_folder, validate_path_component},
    MediaResourceGateway, StorageError,
};
use crate::domain::entities::VideoId;
use crate::domain::value_objects::{
    AudioVideoMedia, ImageMedia, Resource, VideoMediaType, VideoResource,
};

/// Filesystem-backed media resource gateway
///
/// Payloads live under `<base>/videoId-<id>/type-<TYPE>`; a second store for
/// the same slot replaces the previous payload.
#[derive(Clone)]
pub struct FilesystemMediaStorage {
    base_path: PathBuf,
}

impl FilesystemMediaStorage {
    /// Create a new filesystem storage instance
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self { base_path: base_path.into() }
    }

    fn folder_path(&self, video_id: &VideoId) -> PathBuf {
        self.base_path.join(storage_folder(video_id))
    }

    fn slot_path(&self, video_id: &VideoId, media_type: VideoMediaType) -> PathBuf {
        self.folder_path(video_id).join(storage_filename(media_type))
    }

    /// Write a payload to its slot location
    ///
    /// Writes to a temporary file first, then renames into place so readers
    /// never observe a partial payload.
    async fn write_slot(
        &self,
        video_id: &VideoId,
        media_type: VideoMediaType,
        content: &Bytes,
    ) -> Result<String, StorageError> {
        validate_path_component(video_id.as_str())?;
        let file_path = self.slot_path(video_id, media_type);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let temp_path = file_path.with_extension("tmp");

        {
            let mut file = fs::File::create(&temp_path).await?;
            file.write_all(content).await?;
            file.flush().await?;
        }

        fs::rename(&temp_path, &file_path).await?;

        tracing::info!("Stored media payload at path: {}", file_path.display());
        Ok(file_path.to_string_lossy().to_string())
    }
}

#[async_trait]
impl MediaResourceGateway for FilesystemMediaStorage {
    async fn store_audio_video(
        &self,
        video_id: &VideoId,
        resource: &VideoResource,
    ) -> Result<AudioVideoMedia, StorageError> {
        let raw_location =
            self.write_slot(video_id, resource.media_type(), resource.resource().content()).await?;

        Ok(AudioVideoMedia::with(
            resource.resource().checksum().clone(),
            resource.resource().name(),
            raw_location,
        ))
    }

    async fn store_image(
        &self,
        video_id: &VideoId,
        resource: &VideoResource,
    ) -> Result<ImageMedia, StorageError> {
        let location =
            self.write_slot(video_id, resource.media_type(), resource.resource().content()).await?;

        Ok(ImageMedia::with(
            resource.resource().checksum().clone(),
            resource.resource().name(),
            location,
        ))
    }

    async fn get_resource(
        &self,
        video_id: &VideoId,
        media_type: VideoMediaType,
    ) -> Result<Option<Resource>, StorageError> {
        validate_path_component(video_id.as_str())?;
        let file_path = self.slot_path(video_id, media_type);

        if !file_path.exists() {
            return Ok(None);
        }

        let data = fs::read(&file_path).await?;
        let name = storage_filename(media_type);
        let content_type = detect_content_type(&data, Some(&name));

        Ok(Some(Resource::of(Bytes::from(data), content_type, name)))
    }

    async fn clear_resources(&self, video_id: &VideoId) -> Result<(), StorageError> {
        validate_path_component(video_id.as_str())?;
        let folder = self.folder_path(video_id);

        if folder.exists() {
            fs::remove_dir_all(&folder).await?;
            tracing::info!("Cleared media folder: {}", folder.display());
        }

        Ok(())
    }
}
