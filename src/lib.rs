//! 確保資料夾存在的檔案系統工具
//!
//! 對外只提供一個操作：給定路徑，保證呼叫結束後該路徑是資料夾
//! （必要時一併建立缺少的上層資料夾），並以布林值回報成功與否。

pub mod config;
pub mod init;
pub mod tools;

pub use config::EnsurerConfig;
pub use init::init;
pub use tools::{
    DirectoryEnsurer, EnsureError, EnsureOutcome, ensure_directory, ensure_directory_exists,
    validate_directory_exists,
};
