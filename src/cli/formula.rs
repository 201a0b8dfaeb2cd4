//! # formula 子命令 CLI 定义
//!
//! 将化学式分解为元素原子分数
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/formula.rs`

use clap::Args;
use std::path::PathBuf;

/// formula 子命令参数
#[derive(Args, Debug)]
pub struct FormulaArgs {
    /// Chemical formulas, e.g. Fe2O3 NaCl H2O
    #[arg(required = true)]
    pub formulas: Vec<String>,

    /// Also write the compositions to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}
