//! 影音平台介面
//!
//! 排程只依賴這個 trait；認證與 HTTP 呼叫由實作者負責

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 每頁最多取得的影片數
pub const MAX_RESULTS_PER_PAGE: usize = 50;

/// 排程時設定的隱私狀態
pub const SCHEDULED_PRIVACY_STATUS: &str = "private";

#[derive(Debug, Error)]
pub enum PlatformError {
    /// 不影響後續排程的問題，只記錄警告
    #[error("non-critical: {0}")]
    NonCritical(String),
    #[error("request failed: {0}")]
    Request(String),
    #[error("manifest error: {0}")]
    Manifest(String),
}

/// 已上傳的影片
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedVideo {
    pub video_id: String,
    #[serde(default)]
    pub title: String,
}

/// 上傳清單的一頁
#[derive(Debug, Clone, Default)]
pub struct PlaylistPage {
    pub videos: Vec<UploadedVideo>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatus {
    pub privacy_status: String,
    pub publish_at: String,
}

/// 影片狀態更新請求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoStatusUpdate {
    pub id: String,
    pub status: VideoStatus,
}

pub trait UploadPlatform {
    /// 目前帳號的上傳清單 ID
    fn uploads_playlist_id(&self) -> Result<String, PlatformError>;

    fn list_playlist_items(
        &self,
        playlist_id: &str,
        page_token: Option<&str>,
        max_results: usize,
    ) -> Result<PlaylistPage, PlatformError>;

    fn update_video_status(&mut self, update: &VideoStatusUpdate) -> Result<(), PlatformError>;
}

/// 逐頁取得所有已上傳影片
pub fn list_uploaded_videos<P: UploadPlatform + ?Sized>(
    platform: &P,
) -> Result<Vec<UploadedVideo>, PlatformError> {
    let playlist_id = platform.uploads_playlist_id()?;
    let mut videos = Vec::new();
    let mut page_token: Option<String> = None;

    loop {
        let page = platform.list_playlist_items(
            &playlist_id,
            page_token.as_deref(),
            MAX_RESULTS_PER_PAGE,
        )?;
        videos.extend(page.videos);

        match page.next_page_token {
            Some(token) if !token.is_empty() => page_token = Some(token),
            _ => break,
        }
    }

    Ok(videos)
}
