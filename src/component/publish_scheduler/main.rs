//! 發布排程主模組

use super::manifest::ManifestPlatform;
use super::platform::list_uploaded_videos;
use super::schedule_plan::{
    ScheduleResult, ScheduledPublish, apply_schedule, build_schedule, format_publish_time,
    minutes, schedule_start,
};
use crate::config::Config;
use anyhow::{Context, Result};
use chrono::Utc;
use console::style;
use dialoguer::{Confirm, Input};
use log::info;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

const PREVIEW_LIMIT: usize = 10;

/// 發布排程元件
pub struct PublishScheduler {
    config: Config,
    shutdown_signal: Arc<AtomicBool>,
}

impl PublishScheduler {
    pub const fn new(config: Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            config,
            shutdown_signal,
        }
    }

    pub fn run(&self) -> Result<()> {
        println!("{}", style("=== 影片發布排程 ===").cyan().bold());

        let scheduler = &self.config.settings.workflow.scheduler;
        let manifest_path: String = Input::new()
            .with_prompt("請輸入上傳清單檔案")
            .default(scheduler.manifest_path.clone())
            .interact_text()?;
        let manifest_path = PathBuf::from(manifest_path.trim());

        let mut platform = ManifestPlatform::open(&manifest_path)
            .with_context(|| format!("無法開啟上傳清單: {}", manifest_path.display()))?;

        let videos = list_uploaded_videos(&platform).context("無法取得已上傳影片")?;
        if videos.is_empty() {
            println!("{}", style("清單中沒有任何影片").yellow());
            return Ok(());
        }

        let start = schedule_start(Utc::now(), minutes(scheduler.first_delay_minutes)?)?;
        let plan = build_schedule(&videos, start, minutes(scheduler.interval_minutes)?)?;

        self.display_preview(&plan);

        let confirmed = Confirm::new()
            .with_prompt("確定要送出這些排程嗎？")
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", style("操作已取消").yellow());
            return Ok(());
        }

        let result = apply_schedule(&mut platform, &plan, &self.shutdown_signal)?;
        self.print_result(&result, plan.len());

        Ok(())
    }

    fn display_preview(&self, plan: &[ScheduledPublish]) {
        println!();
        println!(
            "{}",
            style(format!(
                "共 {} 支影片，每 {} 分鐘發布一支：",
                plan.len(),
                self.config.settings.workflow.scheduler.interval_minutes
            ))
            .cyan()
        );

        for entry in plan.iter().take(PREVIEW_LIMIT) {
            println!(
                "  {} {} {}",
                style(format_publish_time(entry.publish_at)).cyan(),
                entry.video_id,
                style(&entry.title).dim()
            );
        }
        if plan.len() > PREVIEW_LIMIT {
            println!("  {}", style(format!("... 其餘 {} 支", plan.len() - PREVIEW_LIMIT)).dim());
        }
        println!();
    }

    fn print_result(&self, result: &ScheduleResult, total: usize) {
        println!();
        println!("{}", style("=== 排程結果 ===").cyan().bold());
        println!("  已排程: {} / {} 支", style(result.scheduled).green(), total);
        if result.warnings > 0 {
            println!("  警告: {} 支", style(result.warnings).yellow());
        }

        info!(
            "排程完成 - 成功: {}, 警告: {}, 總計: {}",
            result.scheduled, result.warnings, total
        );
    }
}
