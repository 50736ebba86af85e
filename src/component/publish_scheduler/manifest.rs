//! 以本機 JSON 檔模擬的上傳清單
//!
//! 檔案內容為頻道的上傳清單 ID、影片列表，以及已送出的狀態更新

use super::platform::{
    PlatformError, PlaylistPage, UploadPlatform, UploadedVideo, VideoStatusUpdate,
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadManifest {
    pub uploads_playlist_id: String,
    pub videos: Vec<UploadedVideo>,
    /// 已送出的狀態更新，同一支影片只保留最後一次
    #[serde(default)]
    pub status_updates: Vec<VideoStatusUpdate>,
}

/// 讀寫 manifest 檔的平台實作
#[derive(Debug)]
pub struct ManifestPlatform {
    path: PathBuf,
    manifest: UploadManifest,
}

impl ManifestPlatform {
    pub fn open(path: &Path) -> Result<Self, PlatformError> {
        let content = fs::read_to_string(path)
            .map_err(|e| PlatformError::Manifest(format!("{}: {e}", path.display())))?;
        let manifest: UploadManifest = serde_json::from_str(&content)
            .map_err(|e| PlatformError::Manifest(format!("{}: {e}", path.display())))?;

        Ok(Self {
            path: path.to_path_buf(),
            manifest,
        })
    }

    #[must_use]
    pub const fn manifest(&self) -> &UploadManifest {
        &self.manifest
    }

    fn persist(&self) -> Result<(), PlatformError> {
        let content = serde_json::to_string_pretty(&self.manifest)
            .map_err(|e| PlatformError::Manifest(e.to_string()))?;
        fs::write(&self.path, content)
            .map_err(|e| PlatformError::Manifest(format!("{}: {e}", self.path.display())))
    }
}

impl UploadPlatform for ManifestPlatform {
    fn uploads_playlist_id(&self) -> Result<String, PlatformError> {
        if self.manifest.uploads_playlist_id.is_empty() {
            return Err(PlatformError::Request("找不到上傳清單".to_string()));
        }
        Ok(self.manifest.uploads_playlist_id.clone())
    }

    fn list_playlist_items(
        &self,
        playlist_id: &str,
        page_token: Option<&str>,
        max_results: usize,
    ) -> Result<PlaylistPage, PlatformError> {
        if playlist_id != self.manifest.uploads_playlist_id {
            return Err(PlatformError::Request(format!("未知的清單: {playlist_id}")));
        }

        // 頁碼 token 即為起始索引
        let start = match page_token {
            None => 0,
            Some(token) => token
                .parse::<usize>()
                .map_err(|_| PlatformError::Request(format!("無效的 page token: {token}")))?,
        };

        let total = self.manifest.videos.len();
        let end = start.saturating_add(max_results.max(1)).min(total);
        let videos = self.manifest.videos.get(start..end).unwrap_or_default().to_vec();
        let next_page_token = (end < total).then(|| end.to_string());

        Ok(PlaylistPage {
            videos,
            next_page_token,
        })
    }

    fn update_video_status(&mut self, update: &VideoStatusUpdate) -> Result<(), PlatformError> {
        if !self.manifest.videos.iter().any(|v| v.video_id == update.id) {
            return Err(PlatformError::NonCritical(format!("影片不在清單中: {}", update.id)));
        }

        self.manifest.status_updates.retain(|u| u.id != update.id);
        self.manifest.status_updates.push(update.clone());
        self.persist()?;

        debug!("已更新 {} 的發布時間為 {}", update.id, update.status.publish_at);
        Ok(())
    }
}
