//! # 表格网格读取
//!
//! 将模板导出的 CSV 读成按 (行, 列) 定位的网格。
//!
//! 第一行是表头，不计入行号；空行被跳过；每行长度可以不同；
//! 空单元格视为缺失。
//!
//! ## 依赖关系
//! - 被 `ingest/floating_zone.rs` 使用
//! - 使用 `csv` 库

use crate::error::{CpfsError, Result};

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// 按位置访问的表格
#[derive(Debug, Clone, Default)]
pub struct TemplateGrid {
    rows: Vec<Vec<String>>,
}

impl TemplateGrid {
    /// 从任意读取器解析 CSV
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(|c| c.trim().to_string()).collect());
        }

        Ok(TemplateGrid { rows })
    }

    /// 读取 CSV 文件
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| CpfsError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_reader(file)
    }

    /// 行数（不含表头）
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 单元格文本，缺失或为空时返回 `None`
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    /// 单元格文本，转为拥有的字符串
    pub fn text(&self, row: usize, col: usize) -> Option<String> {
        self.cell(row, col).map(str::to_string)
    }

    /// 单元格数值；缺失时返回 `None`，无法解析时报错
    pub fn number(&self, row: usize, col: usize) -> Result<Option<f64>> {
        match self.cell(row, col) {
            None => Ok(None),
            Some(s) => s
                .parse::<f64>()
                .map(Some)
                .map_err(|_| CpfsError::TemplateCell {
                    row,
                    col,
                    reason: format!("expected a number, found '{}'", s),
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
header,a,b
r0,x,1.5
r1,,
r2,y,not-a-number,extra

r3,z
";

    #[test]
    fn test_grid_positions() {
        let grid = TemplateGrid::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(grid.len(), 4);
        assert_eq!(grid.cell(0, 1), Some("x"));
        assert_eq!(grid.cell(2, 3), Some("extra"));
        assert_eq!(grid.cell(3, 1), Some("z"));
    }

    #[test]
    fn test_grid_empty_and_missing_cells() {
        let grid = TemplateGrid::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(grid.cell(1, 1), None);
        assert_eq!(grid.cell(3, 2), None);
        assert_eq!(grid.cell(99, 0), None);
    }

    #[test]
    fn test_grid_numbers() {
        let grid = TemplateGrid::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(grid.number(0, 2).unwrap(), Some(1.5));
        assert_eq!(grid.number(1, 2).unwrap(), None);
        assert!(matches!(
            grid.number(2, 2),
            Err(CpfsError::TemplateCell { row: 2, col: 2, .. })
        ));
    }
}
