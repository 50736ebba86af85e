use anyhow::{Context, Result};
use log::{info, warn};
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

/// 清空結果統計
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClearResult {
    pub files_deleted: usize,
    pub directories_deleted: usize,
    pub errors: usize,
}

/// 刪除資料夾內的所有項目，保留資料夾本身
///
/// 檔案與符號連結直接刪除，子資料夾遞迴刪除。單一項目失敗只記錄並計數。
pub fn clear_folder(folder: &Path, shutdown_signal: &AtomicBool) -> Result<ClearResult> {
    let mut result = ClearResult::default();

    let entries = fs::read_dir(folder)
        .with_context(|| format!("無法讀取資料夾: {}", folder.display()))?;

    for entry in entries {
        if shutdown_signal.load(Ordering::SeqCst) {
            warn!("收到中斷訊號，停止刪除");
            break;
        }

        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("無法讀取項目: {e}");
                result.errors += 1;
                continue;
            }
        };

        let path = entry.path();
        // symlink_metadata 不跟隨連結，指向資料夾的連結也只刪除連結本身
        let is_dir = match fs::symlink_metadata(&path) {
            Ok(metadata) => metadata.is_dir(),
            Err(e) => {
                warn!("Failed to delete {}. Reason: {e}", path.display());
                result.errors += 1;
                continue;
            }
        };

        let removal = if is_dir {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };

        match removal {
            Ok(()) if is_dir => {
                info!("Deleted directory: {}", path.display());
                result.directories_deleted += 1;
            }
            Ok(()) => {
                info!("Deleted file: {}", path.display());
                result.files_deleted += 1;
            }
            Err(e) => {
                warn!("Failed to delete {}. Reason: {e}", path.display());
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
    fn test_clear_files_and_directories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("a.mp4"), "a").unwrap();
        fs::write(root.join("b.txt"), "b").unwrap();
        fs::create_dir_all(root.join("nested").join("deep")).unwrap();
        fs::write(root.join("nested").join("deep").join("c.mp4"), "c").unwrap();

        let result = clear_folder(root, &AtomicBool::new(false)).unwrap();

        assert_eq!(
            result,
            ClearResult {
                files_deleted: 2,
                directories_deleted: 1,
                errors: 0,
            }
        );
        assert!(root.exists());
        assert_eq!(fs::read_dir(root).unwrap().count(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_to_directory_keeps_target() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target");
        let folder = temp_dir.path().join("folder");
        fs::create_dir_all(&target).unwrap();
        fs::create_dir_all(&folder).unwrap();
        fs::write(target.join("keep.mp4"), "k").unwrap();
        std::os::unix::fs::symlink(&target, folder.join("link")).unwrap();

        let result = clear_folder(&folder, &AtomicBool::new(false)).unwrap();

        assert_eq!(result.files_deleted, 1);
        assert!(target.join("keep.mp4").exists());
    }

    #[test]
    fn test_clear_empty_folder() {
        let temp_dir = TempDir::new().unwrap();
        let result = clear_folder(temp_dir.path(), &AtomicBool::new(false)).unwrap();
        assert_eq!(result, ClearResult::default());
    }

    #[test]
    fn test_clear_missing_folder_is_error() {
        let temp_dir = TempDir::new().unwrap();
        assert!(clear_folder(&temp_dir.path().join("missing"), &AtomicBool::new(false)).is_err());
    }
}
