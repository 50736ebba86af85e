//! 多資料夾影片交錯排序元件
//!
//! 從多個來源資料夾收集影片，交錯排序後依序編號複製

mod interleave;
mod main;
mod video_copier;

pub use interleave::{InterleaveResult, MAX_CONSECUTIVE, interleave, longest_run, repair_runs};
pub use main::{ShuffleSummary, VideoShuffler, shuffle_folders};
pub use video_copier::{CopyResult, copy_in_order, sequence_file_name};
