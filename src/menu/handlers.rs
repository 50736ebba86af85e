use crate::component::{
    FolderCleaner, PrefixRenamer, PublishScheduler, UploadPreparer, VideoShuffler,
};
use crate::config::Config;
use crate::pause;
use anyhow::Result;
use console::{Term, style};
use rust_i18n::t;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 元件可能更新設定檔，執行後重新載入
fn reload_settings(config: &mut Config) -> Result<()> {
    config.settings = Config::new()?.settings;
    Ok(())
}

fn finish(
    term: &Term,
    config: &mut Config,
    outcome: Result<()>,
    shutdown_signal: &AtomicBool,
) -> Result<()> {
    if let Err(e) = outcome {
        eprintln!("{} {:#}", style(t!("main_menu.error_prefix")).red().bold(), e);
    }

    // 中斷只取消當次操作，回到選單後可繼續使用
    shutdown_signal.store(false, Ordering::SeqCst);
    reload_settings(config)?;
    pause(term)
}

pub fn run_folder_cleaner(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    config: &mut Config,
) -> Result<()> {
    let cleaner = FolderCleaner::new(config.clone(), Arc::clone(shutdown_signal));
    let outcome = cleaner.run();
    finish(term, config, outcome, shutdown_signal)
}

pub fn run_prefix_renamer(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    config: &mut Config,
) -> Result<()> {
    let renamer = PrefixRenamer::new(config.clone(), Arc::clone(shutdown_signal));
    let outcome = renamer.run();
    finish(term, config, outcome, shutdown_signal)
}

pub fn run_video_shuffler(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    config: &mut Config,
) -> Result<()> {
    let mut shuffler = VideoShuffler::new(config.clone(), Arc::clone(shutdown_signal));
    let outcome = shuffler.run();
    finish(term, config, outcome, shutdown_signal)
}

pub fn run_upload_preparer(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    config: &mut Config,
) -> Result<()> {
    let mut preparer = UploadPreparer::new(config.clone(), Arc::clone(shutdown_signal));
    let outcome = preparer.run();
    finish(term, config, outcome, shutdown_signal)
}

pub fn run_publish_scheduler(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    config: &mut Config,
) -> Result<()> {
    let scheduler = PublishScheduler::new(config.clone(), Arc::clone(shutdown_signal));
    let outcome = scheduler.run();
    finish(term, config, outcome, shutdown_signal)
}
