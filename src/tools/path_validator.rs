use anyhow::{Result, bail};
use std::path::Path;

/// 只檢查不建立：路徑必須存在且為資料夾
pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("路徑不存在: {}", path.display());
    }
    if !path.is_dir() {
        bail!("路徑不是資料夾: {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_existing_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_directory_exists(temp_dir.path()).is_ok());
    }

    #[test]
    fn test_validate_missing_path_does_not_create() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");

        let err = validate_directory_exists(&missing).unwrap_err();
        assert!(err.to_string().contains("路徑不存在"));
        assert!(!missing.exists());
    }

    #[test]
    fn test_validate_file_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("file.txt");
        std::fs::write(&file, "").unwrap();

        let err = validate_directory_exists(&file).unwrap_err();
        assert!(err.to_string().contains("路徑不是資料夾"));
    }
}
