mod path_prompt;
mod path_validator;
mod progress;
mod video_scanner;

pub use path_prompt::prompt_path_with_history;
pub use path_validator::{ensure_directory_exists, validate_directory_exists};
pub use progress::new_progress_bar;
pub use video_scanner::{scan_video_buckets, scan_video_files};
