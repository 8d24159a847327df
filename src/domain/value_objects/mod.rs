pub mod audio_video_media;
pub mod checksum;
pub mod image_media;
pub mod media_status;
pub mod rating;
pub mod resource;

pub use audio_video_media::*;
pub use checksum::*;
pub use image_media::*;
pub use media_status::*;
pub use rating::*;
pub use resource::*;
