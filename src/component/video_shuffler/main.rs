//! 多資料夾交錯排序主模組
//!
//! 掃描各來源資料夾、交錯排序後以流水號複製到輸出資料夾

use super::interleave::{InterleaveResult, MAX_CONSECUTIVE, interleave};
use super::video_copier::{CopyResult, copy_in_order};
use crate::config::save::save_settings;
use crate::config::{Config, WorkflowSettings};
use crate::tools::{scan_video_buckets, validate_directory_exists};
use anyhow::Result;
use console::style;
use dialoguer::{Confirm, Input};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 交錯排序並複製的結果
#[derive(Debug)]
pub struct ShuffleSummary {
    /// 每個來源資料夾找到的影片數
    pub bucket_sizes: Vec<usize>,
    pub order: InterleaveResult<PathBuf>,
    pub copy: CopyResult,
}

/// 掃描、交錯排序並複製，不含任何互動
pub fn shuffle_folders(
    source_folders: &[PathBuf],
    destination: &Path,
    workflow: &WorkflowSettings,
    shutdown_signal: &AtomicBool,
) -> Result<ShuffleSummary> {
    for folder in source_folders {
        validate_directory_exists(folder)?;
    }

    let buckets = scan_video_buckets(source_folders, workflow)?;
    let bucket_sizes: Vec<usize> = buckets.iter().map(Vec::len).collect();
    info!("Found {} videos in {} folders", bucket_sizes.iter().sum::<usize>(), buckets.len());

    let order = interleave(buckets);
    if order.longest_run() > MAX_CONSECUTIVE {
        warn!(
            "同一資料夾最多連續 {} 支影片，超過上限 {}",
            order.longest_run(),
            MAX_CONSECUTIVE
        );
    }

    let copy = copy_in_order(&order.items, destination, shutdown_signal)?;

    Ok(ShuffleSummary {
        bucket_sizes,
        order,
        copy,
    })
}

/// 影片交錯排序元件
pub struct VideoShuffler {
    config: Config,
    shutdown_signal: Arc<AtomicBool>,
}

impl VideoShuffler {
    pub const fn new(config: Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            config,
            shutdown_signal,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        println!("{}", style("=== 多資料夾交錯排序 ===").cyan().bold());

        let source_folders = self.prompt_source_folders()?;
        if source_folders.is_empty() {
            println!("{}", style("沒有設定任何來源資料夾").yellow());
            return Ok(());
        }

        let destination: String = Input::new()
            .with_prompt("請輸入輸出資料夾")
            .default(self.config.settings.workflow.shuffle.destination_folder.clone())
            .interact_text()?;
        let destination = destination.trim().to_string();

        self.remember_folders(&source_folders, &destination);

        let folders: Vec<PathBuf> = source_folders.iter().map(PathBuf::from).collect();
        let summary = shuffle_folders(
            &folders,
            Path::new(&destination),
            &self.config.settings.workflow,
            &self.shutdown_signal,
        )?;

        if self.shutdown_signal.load(Ordering::SeqCst) {
            println!("{}", style("操作已中斷").yellow());
        }

        self.print_summary(&folders, &summary);
        Ok(())
    }

    fn prompt_source_folders(&self) -> Result<Vec<String>> {
        let current = &self.config.settings.workflow.shuffle.source_folders;

        if !current.is_empty() {
            println!("{}", style("目前的來源資料夾:").dim());
            for folder in current {
                println!("  {} {}", style("•").dim(), folder);
            }

            let keep = Confirm::new()
                .with_prompt("使用這些來源資料夾嗎？")
                .default(true)
                .interact()?;
            if keep {
                return Ok(current.clone());
            }
        }

        let mut folders = Vec::new();
        loop {
            let folder: String = Input::new()
                .with_prompt(format!("來源資料夾 #{}（留空結束）", folders.len() + 1))
                .allow_empty(true)
                .interact_text()?;
            let folder = folder.trim();
            if folder.is_empty() {
                break;
            }
            folders.push(folder.to_string());
        }

        Ok(folders)
    }

    fn remember_folders(&mut self, source_folders: &[String], destination: &str) {
        let shuffle = &mut self.config.settings.workflow.shuffle;
        if shuffle.source_folders == source_folders && shuffle.destination_folder == destination {
            return;
        }

        shuffle.source_folders = source_folders.to_vec();
        shuffle.destination_folder = destination.to_string();
        if let Err(e) = save_settings(&self.config.settings) {
            warn!("無法儲存來源資料夾設定: {e}");
        }
    }

    fn print_summary(&self, folders: &[PathBuf], summary: &ShuffleSummary) {
        println!();
        println!("{}", style("=== 交錯排序結果 ===").cyan().bold());
        for (folder, size) in folders.iter().zip(&summary.bucket_sizes) {
            println!("  {} {}: {} 支", style("•").dim(), folder.display(), size);
        }
        println!("  修補次數: {}", summary.order.repairs);

        let longest = summary.order.longest_run();
        if longest > MAX_CONSECUTIVE {
            println!("  最長連續: {}", style(longest).yellow());
        } else {
            println!("  最長連續: {}", style(longest).green());
        }

        println!("  已複製: {} 支", style(summary.copy.copied).green());
        if summary.copy.errors > 0 {
            println!("  失敗: {} 支", style(summary.copy.errors).red());
        }

        info!(
            "交錯排序完成 - 複製: {}, 失敗: {}, 修補: {}",
            summary.copy.copied, summary.copy.errors, summary.order.repairs
        );
    }
}
