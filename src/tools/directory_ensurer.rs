use super::ensure_error::{EnsureError, EnsureOutcome};
use crate::config::EnsurerConfig;
use log::{debug, warn};
use std::fs::{self, DirBuilder};
use std::io::{self, ErrorKind};
use std::path::Path;

/// 確保指定路徑為資料夾
///
/// 只持有不可變的設定，可在執行緒間共用。內部不做任何同步，
/// 同一路徑的競爭交給作業系統的 mkdir 處理。
#[derive(Debug, Clone, Default)]
pub struct DirectoryEnsurer {
    config: EnsurerConfig,
}

impl DirectoryEnsurer {
    #[must_use]
    pub const fn new(config: EnsurerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &EnsurerConfig {
        &self.config
    }

    /// 呼叫結束時路徑為資料夾則回傳 `true`，任何失敗都回傳 `false`
    pub fn ensure_directory_exists(&self, path: impl AsRef<Path>) -> bool {
        self.ensure(path).is_ok()
    }

    /// 與 [`Self::ensure_directory_exists`] 相同，但回報是否新建以及失敗原因
    ///
    /// 失敗時可能已經建立了部分上層資料夾，不會回滾。
    pub fn ensure(&self, path: impl AsRef<Path>) -> Result<EnsureOutcome, EnsureError> {
        let path = path.as_ref();
        let result = self.ensure_inner(path);

        match &result {
            Ok(EnsureOutcome::AlreadyExists) => debug!("資料夾已存在: {}", path.display()),
            Ok(EnsureOutcome::Created) => debug!("已建立資料夾: {}", path.display()),
            Err(e) => warn!("無法確保資料夾存在: {e}"),
        }

        result
    }

    fn ensure_inner(&self, path: &Path) -> Result<EnsureOutcome, EnsureError> {
        if path.as_os_str().is_empty() {
            return Err(EnsureError::EmptyPath);
        }

        // 其他 metadata 錯誤交給建立步驟回報
        if let Ok(metadata) = fs::metadata(path) {
            if metadata.is_dir() {
                return Ok(EnsureOutcome::AlreadyExists);
            }
            return Err(EnsureError::NotADirectory {
                path: path.to_path_buf(),
            });
        }

        match self.dir_builder().create(path) {
            Ok(()) => Ok(EnsureOutcome::Created),
            Err(source) => self.classify_failure(path, source),
        }
    }

    fn dir_builder(&self) -> DirBuilder {
        let mut builder = DirBuilder::new();
        builder.recursive(self.config.create_parents);

        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            if let Some(mode) = self.config.dir_mode {
                builder.mode(mode);
            }
        }

        builder
    }

    fn classify_failure(
        &self,
        path: &Path,
        source: io::Error,
    ) -> Result<EnsureOutcome, EnsureError> {
        let path_buf = path.to_path_buf();
        match source.kind() {
            // 與其他呼叫競爭時對方先建好了
            ErrorKind::AlreadyExists if path.is_dir() => Ok(EnsureOutcome::AlreadyExists),
            ErrorKind::AlreadyExists | ErrorKind::NotADirectory => {
                Err(EnsureError::NotADirectory { path: path_buf })
            }
            ErrorKind::PermissionDenied => Err(EnsureError::PermissionDenied {
                path: path_buf,
                source,
            }),
            ErrorKind::NotFound if !self.config.create_parents => {
                Err(EnsureError::MissingParent { path: path_buf })
            }
            _ => Err(EnsureError::Io {
                path: path_buf,
                source,
            }),
        }
    }
}

/// 以預設設定確保資料夾存在（含上層資料夾），成功回傳 `true`
pub fn ensure_directory_exists(path: impl AsRef<Path>) -> bool {
    DirectoryEnsurer::default().ensure_directory_exists(path)
}

/// 以預設設定確保資料夾存在，並回報結果種類
pub fn ensure_directory(path: impl AsRef<Path>) -> Result<EnsureOutcome, EnsureError> {
    DirectoryEnsurer::default().ensure(path)
}
