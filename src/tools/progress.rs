use indicatif::{ProgressBar, ProgressStyle};

const BAR_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}";

/// 建立統一樣式的進度條
#[must_use]
pub fn new_progress_bar(len: u64, message: &'static str) -> ProgressBar {
    let progress_bar = ProgressBar::new(len);
    if let Ok(bar_style) = ProgressStyle::default_bar().template(BAR_TEMPLATE) {
        progress_bar.set_style(bar_style.progress_chars("#>-"));
    }
    progress_bar.set_message(message);
    progress_bar
}
