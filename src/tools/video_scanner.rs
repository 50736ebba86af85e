use crate::config::WorkflowSettings;
use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 遞迴掃描目錄下的影片檔案，依路徑排序讓每次掃描結果一致
pub fn scan_video_files(directory: &Path, workflow: &WorkflowSettings) -> Result<Vec<PathBuf>> {
    let mut video_files: Vec<PathBuf> = WalkDir::new(directory)
        .follow_links(false)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| workflow.is_video_file(entry.path()))
        .map(walkdir::DirEntry::into_path)
        .collect();

    video_files.sort();
    Ok(video_files)
}

/// 每個來源資料夾各自掃描成一個 bucket，順序與輸入一致
pub fn scan_video_buckets(
    folders: &[PathBuf],
    workflow: &WorkflowSettings,
) -> Result<Vec<Vec<PathBuf>>> {
    folders
        .iter()
        .map(|folder| scan_video_files(folder, workflow))
        .collect()
}
