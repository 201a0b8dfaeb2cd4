//! # formula 命令实现
//!
//! 在终端表格中显示化学式的元素计数与原子分数，可选导出 CSV。
//!
//! ## 依赖关系
//! - 使用 `cli/formula.rs` 定义的参数
//! - 使用 `formula.rs`
//! - 使用 `utils/output.rs`, `tabled`, `csv`

use crate::cli::formula::FormulaArgs;
use crate::error::{CpfsError, Result};
use crate::formula;
use crate::utils::output;

use std::path::Path;
use tabled::{Table, Tabled};

/// 组成表行
#[derive(Debug, Clone, Tabled)]
struct CompositionRow {
    #[tabled(rename = "Formula")]
    formula: String,
    #[tabled(rename = "Element")]
    element: String,
    #[tabled(rename = "Count")]
    count: u64,
    #[tabled(rename = "Atomic fraction")]
    fraction: String,
}

/// 执行 formula 命令
pub fn execute(args: FormulaArgs) -> Result<()> {
    output::print_header("Elemental Composition");

    let mut rows = Vec::new();
    for input in &args.formulas {
        let rows_for_formula = composition_rows(input);
        if rows_for_formula.is_empty() {
            output::print_warning(&format!("'{}' has no elements", input));
        }
        rows.extend(rows_for_formula);
    }

    if rows.is_empty() {
        return Ok(());
    }

    println!("{}", Table::new(&rows));

    if let Some(path) = &args.csv {
        write_csv(&rows, path)?;
        output::print_success(&format!("Compositions written to '{}'", path.display()));
    }

    Ok(())
}

fn composition_rows(input: &str) -> Vec<CompositionRow> {
    let counts = formula::parse_counts(input);
    let composition = formula::parse(input);

    counts
        .into_iter()
        .zip(composition)
        .map(|((element, count), c)| CompositionRow {
            formula: input.to_string(),
            element,
            count,
            fraction: format!("{:.6}", c.atomic_fraction),
        })
        .collect()
}

fn write_csv(rows: &[CompositionRow], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(["formula", "element", "count", "atomic_fraction"])?;
    for row in rows {
        wtr.write_record([
            row.formula.clone(),
            row.element.clone(),
            row.count.to_string(),
            row.fraction.clone(),
        ])?;
    }

    wtr.flush().map_err(|e| CpfsError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
