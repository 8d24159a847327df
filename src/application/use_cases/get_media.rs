use std::sync::Arc;

use crate::{
    application::{
        dto::{GetMediaCommand, MediaOutput},
        error::AppError,
    },
    domain::{entities::VideoId, value_objects::VideoMediaType},
    infrastructure::storage::MediaResourceGateway,
};

/// Use case for fetching a stored media payload by video id and slot
pub struct GetMediaUseCase<S>
where
    S: MediaResourceGateway + ?Sized,
{
    storage: Arc<S>,
}

impl<S> GetMediaUseCase<S>
where
    S: MediaResourceGateway + ?Sized,
{
    /// Create a new get media use case
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Execute the get media use case
    pub async fn execute(&self, command: GetMediaCommand) -> Result<MediaOutput, AppError> {
        let media_type = VideoMediaType::of(&command.media_type)
            .ok_or_else(|| AppError::not_found("Media type", &command.media_type))?;

        let video_id = VideoId::from(command.video_id.as_str());
        let resource = self
            .storage
            .get_resource(&video_id, media_type)
            .await
            .map_err(|e| AppError::Storage { message: e.to_string() })?
            .ok_or_else(|| {
                AppError::not_found(format!("Resource {media_type} for video"), &command.video_id)
            })?;

        Ok(MediaOutput::from(resource))
    }
}
