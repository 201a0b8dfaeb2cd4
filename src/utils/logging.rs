//! # 日志初始化
//!
//! 规范化钩子和模板导入通过 `tracing` 记录事件，这里安装输出到 stderr 的订阅者。
//! 过滤规则取自 `RUST_LOG`，`--verbose` 时强制为 debug。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `tracing-subscriber`

use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "cpfs_synthesis=warn";
const VERBOSE_LOG_FILTER: &str = "cpfs_synthesis=debug";

/// 安装全局日志订阅者；重复调用时保持第一次的设置
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_LOG_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
