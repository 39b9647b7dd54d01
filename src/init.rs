use env_logger::Env;

/// 初始化日誌（`RUST_LOG` 未設定時預設為 warn）
///
/// 可重複呼叫，已安裝 logger 時不做任何事。
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .try_init();
}
