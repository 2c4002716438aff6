//! Log directory location.

use std::path::PathBuf;

use crate::error::AppError;

/// Get the path to the log directory, `~/Library/Logs/<log_dir>`.
pub fn log_directory(log_dir: &str) -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/tmp"));
    home.join("Library/Logs").join(log_dir)
}

/// Create the log directory if needed and return its path.
pub fn init_log_directory(log_dir: &str) -> Result<PathBuf, AppError> {
    let path = log_directory(log_dir);
    if !path.exists() {
        std::fs::create_dir_all(&path)?;
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory() {
        let path = log_directory("diskjockey");
        assert!(path.ends_with("Library/Logs/diskjockey"));
    }
}
