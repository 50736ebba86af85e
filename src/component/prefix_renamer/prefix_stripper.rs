//! 移除下載工具加在檔名前的前綴
//!
//! 下載的檔名格式為 `<id>_<標題與 hashtag>.mp4`，只保留第一個底線之後的部分

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

/// 重新命名結果統計
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenameResult {
    pub renamed: usize,
    /// 目標檔名已存在而跳過
    pub skipped: usize,
    pub errors: usize,
}

/// 取得第一個 `_` 之後的檔名
///
/// 沒有底線或底線後為空時回傳 `None`
#[must_use]
pub fn strip_prefix(file_name: &str) -> Option<&str> {
    let (_, rest) = file_name.split_once('_')?;
    (!rest.is_empty()).then_some(rest)
}

/// 列出資料夾內（不遞迴）需要改名的檔案與新檔名
pub fn plan_renames(directory: &Path) -> Result<Vec<(String, String)>> {
    let entries = fs::read_dir(directory)
        .with_context(|| format!("無法讀取資料夾: {}", directory.display()))?;

    let mut plan: Vec<(String, String)> = entries
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
        .filter_map(|entry| {
            let name = entry.file_name().to_str()?.to_string();
            let new_name = strip_prefix(&name)?.to_string();
            Some((name, new_name))
        })
        .collect();

    plan.sort();
    Ok(plan)
}

/// 將資料夾內的檔案去掉前綴
///
/// 每次只去掉一層前綴；若檔名仍有前綴可再次執行
pub fn rename_directory(directory: &Path, shutdown_signal: &AtomicBool) -> Result<RenameResult> {
    let mut result = RenameResult::default();

    for (old_name, new_name) in plan_renames(directory)? {
        if shutdown_signal.load(Ordering::SeqCst) {
            warn!("收到中斷訊號，停止重新命名");
            break;
        }

        let old_path = directory.join(&old_name);
        let new_path = directory.join(&new_name);

        if new_path.exists() {
            debug!("跳過已存在的檔案: {}", new_path.display());
            result.skipped += 1;
            continue;
        }

        match fs::rename(&old_path, &new_path) {
            Ok(()) => {
                info!("Renamed: {old_name} -> {new_name}");
                result.renamed += 1;
            }
            Err(e) => {
                warn!("重新命名失敗 {old_name}: {e}");
                result.errors += 1;
            }
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_strip_prefix() {
        assert_eq!(strip_prefix("123_my video #tag.mp4"), Some("my video #tag.mp4"));
        assert_eq!(strip_prefix("a_b_c.mp4"), Some("b_c.mp4"));
        assert_eq!(strip_prefix("plain.mp4"), None);
        assert_eq!(strip_prefix("trailing_"), None);
        assert_eq!(strip_prefix("_leading.mp4"), Some("leading.mp4"));
    }

    #[test]
    fn test_rename_directory() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("001_first.mp4"), "1").unwrap();
        fs::write(root.join("002_second.mp4"), "2").unwrap();
        fs::write(root.join("plain.mp4"), "3").unwrap();
        fs::create_dir_all(root.join("dir_name")).unwrap();

        let result = rename_directory(root, &AtomicBool::new(false)).unwrap();

        assert_eq!(result, RenameResult { renamed: 2, skipped: 0, errors: 0 });
        assert!(root.join("first.mp4").exists());
        assert!(root.join("second.mp4").exists());
        assert!(root.join("plain.mp4").exists());
        assert!(root.join("dir_name").is_dir());
    }

    #[test]
    fn test_rename_skips_existing_target() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("clip.mp4"), "existing").unwrap();
        fs::write(root.join("9_clip.mp4"), "new").unwrap();

        let result = rename_directory(root, &AtomicBool::new(false)).unwrap();

        assert_eq!(result.skipped, 1);
        assert_eq!(fs::read_to_string(root.join("clip.mp4")).unwrap(), "existing");
        assert!(root.join("9_clip.mp4").exists());
    }

    #[test]
    fn test_rename_twice_strips_nested_prefix() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("user_123_title.mp4"), "v").unwrap();

        rename_directory(root, &AtomicBool::new(false)).unwrap();
        assert!(root.join("123_title.mp4").exists());

        rename_directory(root, &AtomicBool::new(false)).unwrap();
        assert!(root.join("title.mp4").exists());
    }
}
