use std::path::{Path, PathBuf};

/// 折線圖輸出
pub mod chart;
/// JSON 輸出
pub mod json;

/// `dir/file_name`, with an empty dir meaning the working directory.
pub(crate) fn output_path(dir: &str, file_name: &str) -> PathBuf {
    if dir.is_empty() {
        PathBuf::from(file_name)
    } else {
        Path::new(dir).join(file_name)
    }
}
