use super::prefix_stripper::{RenameResult, plan_renames, rename_directory};
use crate::config::Config;
use crate::config::save::{add_recent_path, save_settings};
use crate::tools::{prompt_path_with_history, validate_directory_exists};
use anyhow::Result;
use console::style;
use dialoguer::Confirm;
use log::{info, warn};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// 預覽時最多顯示的筆數
const PREVIEW_LIMIT: usize = 20;

/// 移除檔名前綴元件
pub struct PrefixRenamer {
    config: Config,
    shutdown_signal: Arc<AtomicBool>,
}

impl PrefixRenamer {
    pub const fn new(config: Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            config,
            shutdown_signal,
        }
    }

    pub fn run(&self) -> Result<()> {
        println!("{}", style("=== 移除檔名前綴 ===").cyan().bold());

        let Some(input_path) = prompt_path_with_history(
            "請選擇影片資料夾",
            "",
            &self.config.settings.recent_paths,
        )?
        else {
            return Ok(());
        };
        let directory = PathBuf::from(&input_path);
        validate_directory_exists(&directory)?;

        {
            let mut settings = self.config.settings.clone();
            add_recent_path(&mut settings, &input_path);
            if let Err(e) = save_settings(&settings) {
                warn!("無法儲存路徑歷史: {e}");
            }
        }

        let plan = plan_renames(&directory)?;
        if plan.is_empty() {
            println!("{}", style("沒有需要重新命名的檔案").yellow());
            return Ok(());
        }

        self.display_preview(&plan);

        let confirmed = Confirm::new()
            .with_prompt("確定要重新命名這些檔案嗎？")
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", style("操作已取消").yellow());
            return Ok(());
        }

        let result = rename_directory(&directory, &self.shutdown_signal)?;
        self.display_summary(&result);

        Ok(())
    }

    fn display_preview(&self, plan: &[(String, String)]) {
        println!();
        println!("{}", style(format!("共 {} 個檔案將被重新命名：", plan.len())).cyan());
        for (old_name, new_name) in plan.iter().take(PREVIEW_LIMIT) {
            println!("    {} {}", style("舊:").dim(), old_name);
            println!("    {} {}", style("新:").dim(), new_name);
        }
        if plan.len() > PREVIEW_LIMIT {
            println!("  {}", style(format!("... 其餘 {} 個", plan.len() - PREVIEW_LIMIT)).dim());
        }
        println!();
    }

    fn display_summary(&self, result: &RenameResult) {
        println!();
        println!("{}", style("=== 重新命名結果 ===").cyan().bold());
        println!("  成功: {} 個", style(result.renamed).green());
        if result.skipped > 0 {
            println!("  跳過: {} 個", style(result.skipped).yellow());
        }
        if result.errors > 0 {
            println!("  失敗: {} 個", style(result.errors).red());
        }
        if result.renamed > 0 {
            println!("{}", style("若檔名仍有前綴，可再執行一次").dim());
        }

        info!(
            "重新命名完成 - 成功: {}, 跳過: {}, 失敗: {}",
            result.renamed, result.skipped, result.errors
        );
    }
}
