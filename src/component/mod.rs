//! 功能元件模組
//!
//! 每個子模組實現上傳流程中的一個獨立步驟

pub mod folder_cleaner;
pub mod prefix_renamer;
pub mod publish_scheduler;
pub mod upload_preparer;
pub mod video_shuffler;

pub use folder_cleaner::FolderCleaner;
pub use prefix_renamer::PrefixRenamer;
pub use publish_scheduler::PublishScheduler;
pub use upload_preparer::UploadPreparer;
pub use video_shuffler::VideoShuffler;
