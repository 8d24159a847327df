use futures_util::join;

use crate::application::dto::VideoResources;
use crate::application::error::AppError;
use crate::domain::entities::{Video, VideoId};
use crate::domain::value_objects::{
    AudioVideoMedia, ImageMedia, Resource, VideoMediaType, VideoResource,
};
use crate::infrastructure::storage::MediaResourceGateway;

/// Store the provided payloads concurrently and attach the produced media
///
/// Every slot settles before any failure is surfaced, so a failing upload
/// never aborts its siblings mid-flight. Absent slots are left untouched.
pub(crate) async fn store_media<S>(
    storage: &S,
    video: &mut Video,
    resources: VideoResources,
) -> Result<(), AppError>
where
    S: MediaResourceGateway + ?Sized,
{
    let video_id = video.id.clone();
    let VideoResources { video: main, trailer, banner, thumbnail, thumbnail_half } = resources;

    let (main, trailer, banner, thumbnail, thumbnail_half) = join!(
        store_audio_video(storage, &video_id, main, VideoMediaType::Video),
        store_audio_video(storage, &video_id, trailer, VideoMediaType::Trailer),
        store_image(storage, &video_id, banner, VideoMediaType::Banner),
        store_image(storage, &video_id, thumbnail, VideoMediaType::Thumbnail),
        store_image(storage, &video_id, thumbnail_half, VideoMediaType::ThumbnailHalf),
    );

    if let Some(media) = main? {
        video.set_video(Some(media));
    }
    if let Some(media) = trailer? {
        video.set_trailer(Some(media));
    }
    if let Some(media) = banner? {
        video.set_banner(Some(media));
    }
    if let Some(media) = thumbnail? {
        video.set_thumbnail(Some(media));
    }
    if let Some(media) = thumbnail_half? {
        video.set_thumbnail_half(Some(media));
    }

    Ok(())
}

async fn store_audio_video<S>(
    storage: &S,
    video_id: &VideoId,
    resource: Option<Resource>,
    media_type: VideoMediaType,
) -> Result<Option<AudioVideoMedia>, AppError>
where
    S: MediaResourceGateway + ?Sized,
{
    let Some(resource) = resource else { return Ok(None) };

    let media = storage
        .store_audio_video(video_id, &VideoResource::with(resource, media_type))
        .await
        .map_err(|e| AppError::Storage { message: e.to_string() })?;

    Ok(Some(media))
}

async fn store_image<S>(
    storage: &S,
    video_id: &VideoId,
    resource: Option<Resource>,
    media_type: VideoMediaType,
) -> Result<Option<ImageMedia>, AppError>
where
    S: MediaResourceGateway + ?Sized,
{
    let Some(resource) = resource else { return Ok(None) };

    let media = storage
        .store_image(video_id, &VideoResource::with(resource, media_type))
        .await
        .map_err(|e| AppError::Storage { message: e.to_string() })?;

    Ok(Some(media))
}
