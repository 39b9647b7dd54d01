use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnsurerConfig {
    /// 是否一併建立缺少的上層資料夾（`mkdir -p`）
    pub create_parents: bool,
    /// 新建資料夾的 Unix 權限位元，仍受 umask 影響；其他平台忽略
    pub dir_mode: Option<u32>,
}

impl Default for EnsurerConfig {
    fn default() -> Self {
        Self {
            create_parents: true,
            dir_mode: None,
        }
    }
}
