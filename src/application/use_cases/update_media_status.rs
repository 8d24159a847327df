use std::sync::Arc;

use crate::{
    application::{dto::UpdateMediaStatusCommand, error::AppError},
    domain::{
        entities::{Video, VideoId},
        repositories::VideoRepository,
        value_objects::{MediaStatus, VideoMediaType},
    },
};

/// Use case for reconciling encoder status messages into the catalog
///
/// The encoder delivers at least once and may reorder, so a message whose
/// resource id matches no slot is dropped without error, and re-applying a
/// terminal status leaves the aggregate unchanged.
pub struct UpdateMediaStatusUseCase<V>
where
    V: VideoRepository + ?Sized,
{
    video_repository: Arc<V>,
}

impl<V> UpdateMediaStatusUseCase<V>
where
    V: VideoRepository + ?Sized,
{
    /// Create a new update media status use case
    pub fn new(video_repository: Arc<V>) -> Self {
        Self { video_repository }
    }

    /// Execute the update media status use case
    pub async fn execute(&self, command: UpdateMediaStatusCommand) -> Result<(), AppError> {
        let video_id = VideoId::from(command.video_id.as_str());
        let mut video = self
            .video_repository
            .find_by_id(&video_id)
            .await
            .map_err(|e| AppError::internal("Failed to load video", e))?
            .ok_or_else(|| AppError::not_found("Video", &command.video_id))?;

        let Some(media_type) = matching_slot(&video, &command.resource_id) else {
            tracing::info!(
                video_id = %video.id,
                resource_id = %command.resource_id,
                "Ignoring status message for an unknown media resource"
            );
            return Ok(());
        };

        match command.status {
            MediaStatus::Pending => Ok(()),
            MediaStatus::Processing => {
                video.processing(media_type);
                self.persist(&video).await
            }
            MediaStatus::Completed => {
                let encoded_location = format!("{}/{}", command.folder, command.filename);
                video.completed(media_type, &encoded_location);
                self.persist(&video).await
            }
        }
    }

    async fn persist(&self, video: &Video) -> Result<(), AppError> {
        self.video_repository
            .update(video)
            .await
            .map_err(|e| AppError::internal("Failed to persist video", e))
    }
}

/// Find the audio/video slot holding the given resource, video slot first
fn matching_slot(video: &Video, resource_id: &str) -> Option<VideoMediaType> {
    if video.video.as_ref().is_some_and(|m| m.id().eq_ignore_ascii_case(resource_id)) {
        return Some(VideoMediaType::Video);
    }
    if video.trailer.as_ref().is_some_and(|m| m.id().eq_ignore_ascii_case(resource_id)) {
        return Some(VideoMediaType::Trailer);
    }
    None
}
