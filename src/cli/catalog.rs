//! # catalog 子命令 CLI 定义
//!
//! 打印炉子、生长管、坩埚的静态属性表
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/catalog.rs`

use clap::{Args, ValueEnum};

/// 仪器种类
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum InstrumentKind {
    /// Furnaces
    Furnace,
    /// Crystal-growth tubes
    Tube,
    /// Crucibles
    Crucible,
}

impl std::fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstrumentKind::Furnace => write!(f, "furnace"),
            InstrumentKind::Tube => write!(f, "tube"),
            InstrumentKind::Crucible => write!(f, "crucible"),
        }
    }
}

/// catalog 子命令参数
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Only print one table (default: all)
    #[arg(value_enum)]
    pub kind: Option<InstrumentKind>,
}
