//! # 属性查表解析器
//!
//! 仪器类记录（炉子、坩埚、生长管）共用的“型号名 -> 静态属性表 -> 就地赋值”逻辑。
//!
//! ## 属性表格式
//! ```text
//! 名称      | 列 1          | 列 2     | ...
//! Furnace1  | FurnaceModel1 | Steel    | ...
//! Furnace3  | FurnaceModel3 | Titanium |        <- 空单元格 = 不设置
//! ```
//! 按顺序扫描，第一条名称匹配的行生效；名称为空或无匹配行时不做任何修改。
//!
//! ## 依赖关系
//! - 被 `models/furnace.rs`, `models/tube.rs`, `models/crucible.rs` 使用
//! - 被 `commands/catalog.rs` 用于打印属性表
//! - 无外部模块依赖

/// 可由属性表单元格赋值的字段
pub trait Attribute {
    /// 用单元格内容覆盖字段；空单元格使字段变为未设置
    fn assign(&mut self, cell: &str);
}

impl Attribute for Option<String> {
    fn assign(&mut self, cell: &str) {
        *self = if cell.is_empty() {
            None
        } else {
            Some(cell.to_string())
        };
    }
}

impl Attribute for Option<f64> {
    fn assign(&mut self, cell: &str) {
        *self = cell.trim().parse().ok();
    }
}

/// 静态属性表
///
/// `W` 为除名称列之外的属性列数。
#[derive(Debug)]
pub struct AttributeTable<N: 'static, const W: usize> {
    /// 属性列标题（不含名称列）
    pub columns: [&'static str; W],
    /// 表行：(名称, 属性值)
    pub rows: &'static [(N, [&'static str; W])],
}

impl<N: PartialEq + 'static, const W: usize> AttributeTable<N, W> {
    /// 查找第一条名称匹配的行
    pub fn lookup(&self, name: &N) -> Option<&'static [&'static str; W]> {
        self.rows
            .iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, cells)| cells)
    }
}

/// 按名称查表并就地写入目标字段
///
/// 返回是否找到匹配行。名称未设置或无匹配行时目标保持不变。
pub fn resolve<N: PartialEq + 'static, const W: usize>(
    name: Option<&N>,
    table: &AttributeTable<N, W>,
    targets: [&mut dyn Attribute; W],
) -> bool {
    let Some(cells) = name.and_then(|n| table.lookup(n)) else {
        return false;
    };

    for (target, cell) in targets.into_iter().zip(cells.iter()) {
        target.assign(cell);
    }
    true
}
