//! 移除檔名前綴元件
//!
//! 將 `<id>_<標題>` 形式的檔名改為只保留標題

mod main;
mod prefix_stripper;

pub use main::PrefixRenamer;
pub use prefix_stripper::{RenameResult, plan_renames, rename_directory, strip_prefix};
