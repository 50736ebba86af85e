//! 上傳前處理主模組
//!
//! 隨機排序影片、改寫標題後複製到待上傳資料夾

use super::title_builder::TitleBuilder;
use crate::config::{Config, WorkflowSettings};
use crate::config::save::save_settings;
use crate::tools::{
    ensure_directory_exists, new_progress_bar, scan_video_files, validate_directory_exists,
};
use anyhow::Result;
use console::style;
use dialoguer::{Confirm, Input};
use log::{debug, info, warn};
use rand::Rng;
use rand::seq::SliceRandom;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 上傳前處理結果統計
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PrepareResult {
    pub copied: usize,
    /// 標題長度在上限內的影片數
    pub within_limit: usize,
    /// 標題超過上限的影片數
    pub over_limit: usize,
    /// 目標檔名已存在而被覆蓋的次數，這些複製仍計入 `copied`
    pub overwritten: usize,
    pub errors: usize,
}

/// 依標題產生目標檔名，沿用原本的副檔名
fn target_file_name(title: &str, source: &Path) -> String {
    let extension = source
        .extension()
        .map_or_else(|| "mp4".to_string(), |ext| ext.to_string_lossy().to_lowercase());
    format!("{title}.{extension}")
}

/// 隨機排序來源影片、改寫標題並複製到目標資料夾
///
/// 不同子資料夾中同名的影片可能產生相同標題；已存在的同名檔案會被覆蓋，
/// 記錄警告並計入 `overwritten`
pub fn prepare_uploads<R: Rng + ?Sized>(
    source: &Path,
    destination: &Path,
    workflow: &WorkflowSettings,
    rng: &mut R,
    shutdown_signal: &AtomicBool,
) -> Result<PrepareResult> {
    validate_directory_exists(source)?;
    let builder = TitleBuilder::new(&workflow.upload_prep)?;
    ensure_directory_exists(destination)?;

    let mut videos = scan_video_files(source, workflow)?;
    videos.shuffle(rng);

    let mut result = PrepareResult::default();
    let progress_bar = new_progress_bar(videos.len() as u64, "處理中...");

    for video in &videos {
        if shutdown_signal.load(Ordering::SeqCst) {
            progress_bar.abandon_with_message("操作已中斷");
            return Ok(result);
        }

        let base_title = video
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_default();
        let title = builder.build_title(&base_title, rng);
        let target = destination.join(target_file_name(&title, video));

        if builder.within_limit(&title) {
            result.within_limit += 1;
        } else {
            result.over_limit += 1;
        }

        if target.exists() {
            warn!("目標檔案已存在，將被覆蓋: {}", target.display());
            result.overwritten += 1;
        }

        match fs::copy(video, &target) {
            Ok(_) => {
                debug!("Copied {} to {}", video.display(), target.display());
                result.copied += 1;
            }
            Err(e) => {
                warn!("複製失敗 {}: {e}", video.display());
                result.errors += 1;
            }
        }
        progress_bar.inc(1);
    }

    progress_bar.finish_with_message("完成");
    Ok(result)
}

/// 上傳前處理元件
pub struct UploadPreparer {
    config: Config,
    shutdown_signal: Arc<AtomicBool>,
}

impl UploadPreparer {
    pub const fn new(config: Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            config,
            shutdown_signal,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        println!("{}", style("=== 上傳前標題處理 ===").cyan().bold());

        let prep = &self.config.settings.workflow.upload_prep;
        let source: String = Input::new()
            .with_prompt("請輸入來源資料夾")
            .default(prep.source_folder.clone())
            .interact_text()?;
        let destination: String = Input::new()
            .with_prompt("請輸入輸出資料夾")
            .default(prep.destination_folder.clone())
            .interact_text()?;
        let source = source.trim().to_string();
        let destination = destination.trim().to_string();

        println!(
            "{} {}",
            style("固定 hashtag:").dim(),
            prep.fixed_hashtags.join(" ")
        );
        let confirmed = Confirm::new()
            .with_prompt("確定要處理並複製這些影片嗎？")
            .default(true)
            .interact()?;
        if !confirmed {
            println!("{}", style("操作已取消").yellow());
            return Ok(());
        }

        self.remember_folders(&source, &destination);

        let result = prepare_uploads(
            Path::new(&source),
            Path::new(&destination),
            &self.config.settings.workflow,
            &mut rand::thread_rng(),
            &self.shutdown_signal,
        )?;

        self.print_result(&result);
        Ok(())
    }

    fn remember_folders(&mut self, source: &str, destination: &str) {
        let prep = &mut self.config.settings.workflow.upload_prep;
        if prep.source_folder == source && prep.destination_folder == destination {
            return;
        }

        prep.source_folder = source.to_string();
        prep.destination_folder = destination.to_string();
        if let Err(e) = save_settings(&self.config.settings) {
            warn!("無法儲存資料夾設定: {e}");
        }
    }

    fn print_result(&self, result: &PrepareResult) {
        let limit = self.config.settings.workflow.upload_prep.title_limit;

        println!();
        println!("{}", style("=== 處理結果 ===").cyan().bold());
        println!("  已複製: {} 支", style(result.copied).green());
        println!(
            "  標題 <= {} 字元: {} 支",
            limit,
            style(result.within_limit).green()
        );
        if result.over_limit > 0 {
            println!(
                "  標題 > {} 字元: {} 支",
                limit,
                style(result.over_limit).yellow()
            );
        }
        if result.overwritten > 0 {
            println!("  覆蓋同名檔案: {} 支", style(result.overwritten).yellow());
        }
        if result.errors > 0 {
            println!("  失敗: {} 支", style(result.errors).red());
        }

        info!(
            "上傳前處理完成 - 複製: {}, 未超長: {}, 超長: {}, 失敗: {}",
            result.copied, result.within_limit, result.over_limit, result.errors
        );
    }
}
