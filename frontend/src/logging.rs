//! 日志初始化
//!
//! `tracing` 事件输出到浏览器控制台。默认 WARN，
//! 可通过 `localStorage["pharmaboard_log_level"]` 调整。

use crate::web::LocalStorage;
use pharmaboard_shared::config::LOG_LEVEL_STORAGE_KEY;
use std::sync::Once;
use tracing::level_filters::LevelFilter;

static INIT: Once = Once::new();

/// 初始化日志与 panic 钩子，可重复调用
pub fn init() {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        use tracing_subscriber::prelude::*;
        use tracing_web::MakeWebConsoleWriter;

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(MakeWebConsoleWriter::new())
            .without_time(); // WASM 中没有 std::time

        let level = stored_log_level().unwrap_or(LevelFilter::WARN);

        tracing_subscriber::registry()
            .with(level)
            .with(fmt_layer)
            .init();
    });
}

fn stored_log_level() -> Option<LevelFilter> {
    parse_level(&LocalStorage::get(LOG_LEVEL_STORAGE_KEY)?)
}

fn parse_level(raw: &str) -> Option<LevelFilter> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}
