use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 確保資料夾時成功的結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnsureOutcome {
    /// 呼叫前就已經是資料夾，沒有任何變更
    AlreadyExists,
    /// 本次呼叫建立了資料夾
    Created,
}

#[derive(Error, Debug)]
pub enum EnsureError {
    #[error("path is empty")]
    EmptyPath,

    #[error("path exists but is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("permission denied while creating {}", path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parent directory does not exist: {}", path.display())]
    MissingParent { path: PathBuf },

    #[error("failed to create directory {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl EnsureError {
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::EmptyPath => None,
            Self::NotADirectory { path }
            | Self::PermissionDenied { path, .. }
            | Self::MissingParent { path }
            | Self::Io { path, .. } => Some(path),
        }
    }
}
