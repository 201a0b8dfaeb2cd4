//! # 表格模板导入模块
//!
//! 按固定位置读取表格模板单元格，映射到记录字段。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/`, `archive.rs`
//! - 子模块: grid, floating_zone

pub mod floating_zone;
pub mod grid;

pub use floating_zone::{apply_template, ImportedCrystal, INVALID_TEMPLATE_NOTE};
pub use grid::TemplateGrid;

#[cfg(test)]
pub(crate) use floating_zone::template_csv;
