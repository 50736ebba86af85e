//! 清空資料夾元件
//!
//! 刪除指定資料夾內的所有檔案與子資料夾

mod cleaner;
mod main;

pub use cleaner::{ClearResult, clear_folder};
pub use main::FolderCleaner;
