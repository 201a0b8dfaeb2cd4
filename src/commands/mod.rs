//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `archive.rs`, `ingest/`, `models/`, `utils/`
//! - 子模块: normalize, formula, catalog, import

pub mod catalog;
pub mod formula;
pub mod import;
pub mod normalize;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Normalize(args) => normalize::execute(args),
        Commands::Formula(args) => formula::execute(args),
        Commands::Catalog(args) => catalog::execute(args),
        Commands::Import(args) => import::execute(args),
    }
}
