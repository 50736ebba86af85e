use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

/// 最近使用路徑的保留數量
pub const MAX_RECENT_PATHS: usize = 10;

/// 排程分鐘數設定的上限（一年）
pub const MAX_SCHEDULE_MINUTES: i64 = 365 * 24 * 60;

/// 介面語言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "zh-TW")]
    ZhTw,
}

impl Language {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::ZhTw => "zh-TW",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnUs => write!(f, "English"),
            Self::ZhTw => write!(f, "繁體中文"),
        }
    }
}

/// 交錯洗牌設定
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShuffleSettings {
    /// 來源資料夾，每個資料夾是一個 bucket
    pub source_folders: Vec<String>,
    /// 依序編號後的輸出資料夾
    pub destination_folder: String,
}

impl Default for ShuffleSettings {
    fn default() -> Self {
        Self {
            source_folders: vec!["profile_vids_1".to_string(), "profile_vids_2".to_string()],
            destination_folder: "shuffled_uploads".to_string(),
        }
    }
}

/// 上傳前標題處理設定
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadPrepSettings {
    pub source_folder: String,
    pub destination_folder: String,
    /// 固定加入的 hashtag 池
    pub fixed_hashtags: Vec<String>,
    /// 原始標題中要移除的 hashtag
    pub excluded_hashtags: Vec<String>,
    /// 每支影片從固定池抽取的數量
    pub hashtag_pick_count: usize,
    pub marker_hashtag: String,
    /// 標題長度上限（字元數）
    pub title_limit: usize,
}

impl Default for UploadPrepSettings {
    fn default() -> Self {
        Self {
            source_folder: "shuffled_uploads".to_string(),
            destination_folder: "ready_uploads".to_string(),
            fixed_hashtags: vec![
                "#mainhashtag1".to_string(),
                "#mainhashtag2".to_string(),
                "#mainhashtag3".to_string(),
            ],
            excluded_hashtags: vec!["#fyp".to_string(), "#fy".to_string(), "#tiktok".to_string()],
            hashtag_pick_count: 3,
            marker_hashtag: "#shorts".to_string(),
            title_limit: 100,
        }
    }
}

/// 排程發布設定
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerSettings {
    /// 本機 manifest 檔案路徑
    pub manifest_path: String,
    /// 第一支影片距離現在的分鐘數
    pub first_delay_minutes: i64,
    /// 每支影片之間的間隔分鐘數
    pub interval_minutes: i64,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            manifest_path: "uploads_manifest.json".to_string(),
            first_delay_minutes: 5,
            interval_minutes: 240,
        }
    }
}

impl SchedulerSettings {
    /// 第一支影片的延遲可為 0，但不可超過上限
    #[must_use]
    pub const fn is_valid_first_delay(minutes: i64) -> bool {
        minutes >= 0 && minutes <= MAX_SCHEDULE_MINUTES
    }

    #[must_use]
    pub const fn is_valid_interval(minutes: i64) -> bool {
        minutes > 0 && minutes <= MAX_SCHEDULE_MINUTES
    }
}

/// 流程設定，取代原本寫死在各步驟的常數
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowSettings {
    /// 視為影片的副檔名（含前導點）
    pub video_extensions: Vec<String>,
    pub shuffle: ShuffleSettings,
    pub upload_prep: UploadPrepSettings,
    pub scheduler: SchedulerSettings,
    /// 清空資料夾的預設目標
    pub clear_folder: String,
}

impl Default for WorkflowSettings {
    fn default() -> Self {
        Self {
            video_extensions: vec![
                ".mp4".to_string(),
                ".mov".to_string(),
                ".avi".to_string(),
                ".mkv".to_string(),
            ],
            shuffle: ShuffleSettings::default(),
            upload_prep: UploadPrepSettings::default(),
            scheduler: SchedulerSettings::default(),
            clear_folder: "ready_uploads".to_string(),
        }
    }
}

impl WorkflowSettings {
    #[must_use]
    pub fn video_extensions_set(&self) -> HashSet<String> {
        self.video_extensions
            .iter()
            .map(|ext| ext.to_lowercase())
            .collect()
    }

    #[must_use]
    pub fn is_video_file(&self, path: &Path) -> bool {
        let video_extensions = self.video_extensions_set();
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| video_extensions.contains(&format!(".{}", ext.to_lowercase())))
    }
}

/// 儲存在 settings.json 的使用者設定
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UserSettings {
    pub language: Language,
    pub recent_paths: Vec<String>,
    pub workflow: WorkflowSettings,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub settings: UserSettings,
}
