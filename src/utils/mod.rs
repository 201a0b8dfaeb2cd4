//! # 工具函数模块
//!
//! 提供美化输出、进度条和日志初始化。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块和 `main.rs` 使用
//! - 子模块: output, progress, logging

pub mod logging;
pub mod output;
pub mod progress;
