//! # catalog 命令实现
//!
//! 打印仪器型号名对应的静态属性表。
//!
//! ## 依赖关系
//! - 使用 `cli/catalog.rs` 定义的参数
//! - 使用 `resolver.rs` 和各仪器模型中的属性表
//! - 使用 `utils/output.rs`, `tabled`

use crate::cli::catalog::{CatalogArgs, InstrumentKind};
use crate::error::Result;
use crate::models::crucible::CRUCIBLE_TABLE;
use crate::models::furnace::FURNACE_TABLE;
use crate::models::tube::TUBE_TABLE;
use crate::resolver::AttributeTable;
use crate::utils::output;

use std::fmt::Display;
use tabled::builder::Builder;
use tabled::Table;

/// 执行 catalog 命令
pub fn execute(args: CatalogArgs) -> Result<()> {
    let kinds = match args.kind {
        Some(kind) => vec![kind],
        None => vec![
            InstrumentKind::Furnace,
            InstrumentKind::Tube,
            InstrumentKind::Crucible,
        ],
    };

    for kind in kinds {
        let table = match kind {
            InstrumentKind::Furnace => render(&FURNACE_TABLE),
            InstrumentKind::Tube => render(&TUBE_TABLE),
            InstrumentKind::Crucible => render(&CRUCIBLE_TABLE),
        };
        output::print_header(&format!("{} catalog", kind));
        println!("{}", table);
    }

    Ok(())
}

/// 将属性表渲染为终端表格，空单元格显示为 `-`
fn render<N: Display + 'static, const W: usize>(table: &AttributeTable<N, W>) -> Table {
    let mut builder = Builder::default();
    builder.push_record(std::iter::once("Name").chain(table.columns.iter().copied()));

    for (name, cells) in table.rows {
        builder.push_record(std::iter::once(name.to_string()).chain(cells.iter().map(|c| {
            if c.is_empty() {
                "-".to_string()
            } else {
                c.to_string()
            }
        })));
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_furnace_table() {
        let rendered = render(&FURNACE_TABLE).to_string();
        assert!(rendered.contains("Furnace2"));
        assert!(rendered.contains("Cast Iron"));
        assert!(rendered.contains("Heating"));
    }

    #[test]
    fn test_render_marks_blank_cells() {
        let rendered = render(&TUBE_TABLE).to_string();
        let row = rendered
            .lines()
            .find(|l| l.contains("TubeType3"))
            .unwrap();
        assert!(row.contains('-'));
    }
}
