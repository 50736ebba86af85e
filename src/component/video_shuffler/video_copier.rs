//! 依交錯順序複製影片並加上流水號

use crate::tools::{ensure_directory_exists, new_progress_bar};
use anyhow::Result;
use log::{debug, warn};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// 複製結果統計
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CopyResult {
    pub copied: usize,
    pub errors: usize,
}

/// 第 `index` 個（從 0 起算）影片的目標檔名，例如 `0001_clip.mp4`
#[must_use]
pub fn sequence_file_name(index: usize, source: &Path) -> String {
    let file_name = source.file_name().unwrap_or_default().to_string_lossy();
    format!("{:04}_{}", index + 1, file_name)
}

/// 把影片依序複製到目標資料夾
///
/// 目標檔名在複製前就已決定，因此可平行複製。已存在的同名檔案會被覆蓋。
pub fn copy_in_order(
    videos: &[PathBuf],
    destination: &Path,
    shutdown_signal: &AtomicBool,
) -> Result<CopyResult> {
    ensure_directory_exists(destination)?;

    let copied = AtomicUsize::new(0);
    let errors = AtomicUsize::new(0);
    let progress_bar = new_progress_bar(videos.len() as u64, "複製中...");

    videos.par_iter().enumerate().for_each(|(index, source)| {
        if shutdown_signal.load(Ordering::SeqCst) {
            return;
        }

        let target = destination.join(sequence_file_name(index, source));
        match fs::copy(source, &target) {
            Ok(_) => {
                debug!("Copied {} to {}", source.display(), target.display());
                copied.fetch_add(1, Ordering::SeqCst);
            }
            Err(e) => {
                warn!("複製失敗 {}: {e}", source.display());
                errors.fetch_add(1, Ordering::SeqCst);
            }
        }
        progress_bar.inc(1);
    });

    if shutdown_signal.load(Ordering::SeqCst) {
        progress_bar.abandon_with_message("操作已中斷");
    } else {
        progress_bar.finish_with_message("完成");
    }

    Ok(CopyResult {
        copied: copied.load(Ordering::SeqCst),
        errors: errors.load(Ordering::SeqCst),
    })
}
