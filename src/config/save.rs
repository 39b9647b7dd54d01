use crate::config::types::EnsurerConfig;
use crate::tools::ensure_directory;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

impl EnsurerConfig {
    /// 以 pretty JSON 寫入設定，必要時建立上層資料夾
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            ensure_directory(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        Ok(())
    }
}
