pub mod page;
pub mod video_get;
pub mod video_upload;
