//! # normalize 子命令 CLI 定义
//!
//! 规范化单个存档文件或目录中的全部存档文件
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/normalize.rs`

use crate::models::DEFAULT_LOCATION;

use clap::Args;
use std::path::PathBuf;

/// normalize 子命令参数
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Archive file or directory containing archive files
    pub input: PathBuf,

    /// Glob pattern(s) for archive files, comma separated
    #[arg(short, long, default_value = "*.archive.json")]
    pub pattern: String,

    /// Recurse into subdirectories
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Location filled into process records
    #[arg(long, env = "CPFS_LOCATION", default_value = DEFAULT_LOCATION)]
    pub location: String,

    /// Report what would change without writing files
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}
