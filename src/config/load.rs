use crate::config::types::EnsurerConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

impl EnsurerConfig {
    /// 從 JSON 檔案載入設定
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// 檔案不存在時回傳預設設定
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_or_default_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = EnsurerConfig::load_or_default(&temp_dir.path().join("none.json")).unwrap();
        assert_eq!(config, EnsurerConfig::default());
    }

    #[test]
    fn test_load_reads_fields() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ensurer.json");
        fs::write(&path, r#"{"create_parents": false, "dir_mode": 493}"#).unwrap();

        let config = EnsurerConfig::load(&path).unwrap();
        assert!(!config.create_parents);
        assert_eq!(config.dir_mode, Some(0o755));
    }

    #[test]
    fn test_load_reports_path_on_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = EnsurerConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }
}
