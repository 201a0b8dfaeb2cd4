//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `normalize`: 规范化存档文件（可批量、并行）
//! - `formula`: 将化学式分解为原子分数
//! - `catalog`: 打印仪器属性表
//! - `import`: 从浮区法表格模板生成存档
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: normalize, formula, catalog, import

pub mod catalog;
pub mod formula;
pub mod import;
pub mod normalize;

use clap::{Parser, Subcommand};

/// cpfs - 晶体生长合成记录工具
#[derive(Parser)]
#[command(name = "cpfs")]
#[command(version)]
#[command(about = "Crystal-growth synthesis records: normalize, inspect and import", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging (otherwise RUST_LOG is honoured)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Normalize archive files: resolve instruments, derive compositions, fill defaults
    Normalize(normalize::NormalizeArgs),

    /// Decompose chemical formulas into atomic fractions
    Formula(formula::FormulaArgs),

    /// Print the instrument attribute tables
    Catalog(catalog::CatalogArgs),

    /// Import a floating zone spreadsheet template (CSV export) into archives
    Import(import::ImportArgs),
}
