use std::sync::Arc;

use crate::{
    application::{dto::DeleteVideoCommand, error::AppError},
    domain::{entities::VideoId, repositories::VideoRepository},
    infrastructure::storage::MediaResourceGateway,
};

/// Use case for deleting a video and its stored media payloads
pub struct DeleteVideoUseCase<V, S>
where
    V: VideoRepository + ?Sized,
    S: MediaResourceGateway + ?Sized,
{
    video_repository: Arc<V>,
    storage: Arc<S>,
}

impl<V, S> DeleteVideoUseCase<V, S>
where
    V: VideoRepository + ?Sized,
    S: MediaResourceGateway + ?Sized,
{
    /// Create a new delete video use case
    pub fn new(video_repository: Arc<V>, storage: Arc<S>) -> Self {
        Self { video_repository, storage }
    }

    /// Execute the delete video use case
    ///
    /// The catalog record is the source of truth; once it is gone the storage
    /// sweep is best effort and a failure there never fails the deletion.
    pub async fn execute(&self, command: DeleteVideoCommand) -> Result<(), AppError> {
        tracing::info!("Deleting video with id: {}", command.id);

        let video_id = VideoId::from(command.id.as_str());
        let deleted = self
            .video_repository
            .delete_by_id(&video_id)
            .await
            .map_err(|e| AppError::internal("Failed to delete video", e))?;

        if !deleted {
            return Err(AppError::not_found("Video", &command.id));
        }

        if let Err(err) = self.storage.clear_resources(&video_id).await {
            tracing::warn!(
                video_id = %video_id,
                error = %err,
                "Failed to clear media resources for deleted video"
            );
        }

        tracing::info!("Video deleted with id: {}", video_id);
        Ok(())
    }
}
