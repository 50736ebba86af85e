//! 影片發布排程元件
//!
//! 取得頻道所有已上傳影片，依固定間隔設定為私人並排定公開時間

mod main;
mod manifest;
mod platform;
mod schedule_plan;

pub use main::PublishScheduler;
pub use manifest::{ManifestPlatform, UploadManifest};
pub use platform::{
    MAX_RESULTS_PER_PAGE, PlatformError, PlaylistPage, UploadPlatform, UploadedVideo,
    VideoStatus, VideoStatusUpdate, list_uploaded_videos,
};
pub use schedule_plan::{
    ScheduleResult, ScheduledPublish, apply_schedule, build_schedule, format_publish_time,
    minutes, schedule_start, status_update,
};
