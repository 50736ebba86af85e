use super::cleaner::{ClearResult, clear_folder};
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

/// 清空資料夾元件
pub struct FolderCleaner {
    config: Config,
    shutdown_signal: Arc<AtomicBool>,
}

impl FolderCleaner {
    pub const fn new(config: Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            config,
            shutdown_signal,
        }
    }

    pub fn run(&self) -> Result<()> {
        println!("{}", style("=== 清空資料夾 ===").cyan().bold());

        let Some(input_path) = prompt_path_with_history(
            "請選擇要清空的資料夾",
            &self.config.settings.workflow.clear_folder,
            &self.config.settings.recent_paths,
        )?
        else {
            return Ok(());
        };
        let folder = PathBuf::from(&input_path);
        validate_directory_exists(&folder)?;

        {
            let mut settings = self.config.settings.clone();
            add_recent_path(&mut settings, &input_path);
            if let Err(e) = save_settings(&settings) {
                warn!("無法儲存路徑歷史: {e}");
            }
        }

        let confirmed = Confirm::new()
            .with_prompt(format!("確定要刪除 {} 內的所有檔案與資料夾嗎？", folder.display()))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", style("操作已取消").yellow());
            return Ok(());
        }

        let result = clear_folder(&folder, &self.shutdown_signal)?;
        self.print_result(&result);

        Ok(())
    }

    fn print_result(&self, result: &ClearResult) {
        println!();
        println!("{}", style("Folder cleared.").green().bold());
        println!("  刪除檔案: {} 個", style(result.files_deleted).green());
        println!("  刪除資料夾: {} 個", style(result.directories_deleted).green());
        if result.errors > 0 {
            println!("  失敗: {} 個", style(result.errors).red());
        }

        info!(
            "清空完成 - 檔案: {}, 資料夾: {}, 失敗: {}",
            result.files_deleted, result.directories_deleted, result.errors
        );
    }
}
