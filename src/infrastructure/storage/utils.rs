use super::StorageError;
use crate::domain::entities::VideoId;
use crate::domain::value_objects::VideoMediaType;

/// Storage folder holding every payload of a video
#[must_use]
pub fn storage_folder(video_id: &VideoId) -> String {
    format!("videoId-{video_id}")
}

/// Reject values that do not form a single path component
///
/// Video ids arrive from external callers and become directory names.
pub fn validate_path_component(value: &str) -> Result<(), StorageError> {
    if value.is_empty() || value.contains(['/', '\\']) || value.contains("..") {
        return Err(StorageError::InvalidPath { path: value.to_string() });
    }
    Ok(())
}

/// Storage filename for a media slot
#[must_use]
pub fn storage_filename(media_type: VideoMediaType) -> String {
    format!("type-{media_type}")
}

/// Detect MIME type from file content
#[must_use]
pub fn detect_content_type(data: &[u8], filename: Option<&str>) -> String {
    // First, try to detect from content
    if data.len() >= 4 {
        match &data[0..4] {
            [0xFF, 0xD8, 0xFF, ..] => return "image/jpeg".to_string(),
            [0x89, 0x50, 0x4E, 0x47] => return "image/png".to_string(),
            [0x47, 0x49, 0x46, 0x38] => return "image/gif".to_string(),
            [0x52, 0x49, 0x46, 0x46] if data.len() >= 12 && &data[8..12] == b"WEBP" => {
                return "image/webp".to_string();
            }
            _ => {}
        }
    }

    if data.len() >= 8 && data[4..8] == [0x66, 0x74, 0x79, 0x70] {
        // ISO base media container: mp4 video or avif image
        if data.len() >= 12 && (&data[8..12] == b"avif" || &data[8..12] == b"avis") {
            return "image/avif".to_string();
        }
        return "video/mp4".to_string();
    }

    // Fall back to filename extension
    if let Some(filename) = filename {
        match filename.split('.').next_back().map(str::to_lowercase).as_deref() {
            Some("jpg" | "jpeg") => "image/jpeg".to_string(),
            Some("png") => "image/png".to_string(),
            Some("gif") => "image/gif".to_string(),
            Some("webp") => "image/webp".to_string(),
            Some("avif") => "image/avif".to_string(),
            Some("mp4") => "video/mp4".to_string(),
            Some("webm") => "video/webm".to_string(),
            Some("mov") => "video/quicktime".to_string(),
            Some("mp3") => "audio/mpeg".to_string(),
            Some("wav") => "audio/wav".to_string(),
            _ => "application/octet-stream".to_string(),
        }
    } else {
        "application/octet-stream".to_string()
    }
}
