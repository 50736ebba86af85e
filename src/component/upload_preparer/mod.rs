//! 上傳前標題處理元件
//!
//! 為影片標題加上 hashtag 並複製到待上傳資料夾

mod main;
mod title_builder;

pub use main::{PrepareResult, UploadPreparer, prepare_uploads};
pub use title_builder::TitleBuilder;
