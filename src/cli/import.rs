//! # import 子命令 CLI 定义
//!
//! 从浮区法表格模板 (CSV 导出) 生成工艺与晶体存档
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/import.rs`

use crate::models::DEFAULT_LOCATION;

use clap::Args;
use std::path::PathBuf;

/// import 子命令参数
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Template CSV file
    pub template: PathBuf,

    /// Directory for the generated archives (default: next to the template)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Location filled into the process record
    #[arg(long, env = "CPFS_LOCATION", default_value = DEFAULT_LOCATION)]
    pub location: String,

    /// Overwrite existing archive files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
