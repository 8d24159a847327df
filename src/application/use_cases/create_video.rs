use std::sync::Arc;

use super::store_media::store_media;
use crate::{
    application::{
        dto::{CreateVideoCommand, CreateVideoOutput, VideoResources},
        error::AppError,
        existence::{unique_ids, validate_existence},
    },
    domain::{
        entities::{CastMemberId, CategoryId, GenreId, Video},
        repositories::{
            CastMemberRepository, CategoryRepository, GenreRepository, VideoRepository,
        },
        validation::{Notification, ValidationHandler},
        value_objects::Rating,
        AggregateRoot,
    },
    infrastructure::storage::MediaResourceGateway,
};

/// Use case for creating a video together with its media payloads
pub struct CreateVideoUseCase<V, C, G, M, S>
where
    V: VideoRepository + ?Sized,
    C: CategoryRepository + ?Sized,
    G: GenreRepository + ?Sized,
    M: CastMemberRepository + ?Sized,
    S: MediaResourceGateway + ?Sized,
{
    video_repository: Arc<V>,
    category_repository: Arc<C>,
    genre_repository: Arc<G>,
    cast_member_repository: Arc<M>,
    storage: Arc<S>,
}

impl<V, C, G, M, S> CreateVideoUseCase<V, C, G, M, S>
where
    V: VideoRepository + ?Sized,
    C: CategoryRepository + ?Sized,
    G: GenreRepository + ?Sized,
    M: CastMemberRepository + ?Sized,
    S: MediaResourceGateway + ?Sized,
{
    /// Create a new create video use case
    pub fn new(
        video_repository: Arc<V>,
        category_repository: Arc<C>,
        genre_repository: Arc<G>,
        cast_member_repository: Arc<M>,
        storage: Arc<S>,
    ) -> Self {
        Self { video_repository, category_repository, genre_repository, cast_member_repository, storage }
    }

    /// Execute the create video use case
    ///
    /// All validation errors are gathered before anything is persisted or
    /// stored; a later failure triggers a best-effort storage cleanup and
    /// surfaces as an internal error carrying the new video id.
    pub async fn execute(&self, command: CreateVideoCommand) -> Result<CreateVideoOutput, AppError> {
        tracing::info!("Creating video with title: {}", command.title);

        let rating = command.rating.as_deref().and_then(Rating::of);
        let categories: Vec<CategoryId> = unique_ids(&command.categories);
        let genres: Vec<GenreId> = unique_ids(&command.genres);
        let cast_members: Vec<CastMemberId> = unique_ids(&command.cast_members);
        let resources = command.resources;

        let mut notification = Notification::new();
        self.validate_references(&mut notification, &categories, &genres, &cast_members).await?;

        let mut video = Video::new_video(
            command.title,
            command.description,
            command.launched_at,
            command.duration,
            rating,
            command.opened,
            command.published,
            categories.into_iter().collect(),
            genres.into_iter().collect(),
            cast_members.into_iter().collect(),
        );

        video.validate(&mut notification)?;

        if notification.has_errors() {
            return Err(AppError::Validation { errors: notification.into_errors() });
        }

        if let Err(err) = self.persist_and_store(&mut video, resources).await {
            if let Err(clear_err) = self.storage.clear_resources(&video.id).await {
                tracing::warn!(
                    video_id = %video.id,
                    error = %clear_err,
                    "Failed to clear media resources after aborted create"
                );
            }
            tracing::error!(
                error_type = err.error_type(),
                video_id = %video.id,
                "Create video failed: {err}"
            );
            return Err(AppError::internal(
                format!("An error on create video was observed [videoId:{}]", video.id),
                err,
            ));
        }

        tracing::info!("Video created with id: {}", video.id);
        Ok(CreateVideoOutput::from(&video))
    }

    async fn validate_references(
        &self,
        notification: &mut Notification,
        categories: &[CategoryId],
        genres: &[GenreId],
        cast_members: &[CastMemberId],
    ) -> Result<(), AppError> {
        let missing = validate_existence("categories", categories, |ids| async move {
            self.category_repository.exists_by_ids(&ids).await
        })
        .await
        .map_err(|e| AppError::internal("Failed to look up categories", e))?;
        if let Some(error) = missing {
            notification.append(error)?;
        }

        let missing = validate_existence("genres", genres, |ids| async move {
            self.genre_repository.exists_by_ids(&ids).await
        })
        .await
        .map_err(|e| AppError::internal("Failed to look up genres", e))?;
        if let Some(error) = missing {
            notification.append(error)?;
        }

        let missing = validate_existence("cast members", cast_members, |ids| async move {
            self.cast_member_repository.exists_by_ids(&ids).await
        })
        .await
        .map_err(|e| AppError::internal("Failed to look up cast members", e))?;
        if let Some(error) = missing {
            notification.append(error)?;
        }

        Ok(())
    }

    async fn persist_and_store(
        &self,
        video: &mut Video,
        resources: VideoResources,
    ) -> Result<(), AppError> {
        self.video_repository
            .create(video)
            .await
            .map_err(|e| AppError::internal("Failed to persist video", e))?;

        store_media(self.storage.as_ref(), video, resources).await?;

        self.video_repository
            .update(video)
            .await
            .map_err(|e| AppError::internal("Failed to persist video media", e))
    }
}
