//! # 浮区法模板导入
//!
//! 从浮区法表格模板按固定单元格位置读取数值，写入工艺记录，
//! 并生成一个由工艺引用的晶体记录。
//!
//! ## 模板布局（行号不含表头，从 0 开始）
//! ```text
//! ( 2,1)  "<...> CPFSFloatingZone"   模板标识（第二个词）
//! (10,2)  工艺名称
//! (13,2)  炉子型号名
//! (16..19,2)  料棒：预处理、籽晶棒直径 mm、料棒直径 mm、晶向
//! (24..28, 1..4)  原料：化学式、形态、质量 g、供应商
//! (31..35,2)  步骤：熔化功率 %、生长功率 %、转速 Hz、转向、拉速 mm/min
//! (38..45,2)  晶体：编号、成分、长度 mm、单/多晶、形状、晶向、安全性、备注
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/normalize.rs` 和 `commands/import.rs` 调用
//! - 使用 `ingest/grid.rs`, `models/`, `archive.rs`

use super::grid::TemplateGrid;
use crate::archive;
use crate::error::{CpfsError, Result};
use crate::models::process::PullingStep;
use crate::models::{
    ComponentState, Crystal, FloatingZoneProcess, Furnace, FurnaceName,
    InitialSynthesisComponent, Normalize, NormalizeContext, RodInformation,
};

/// 模板标识
pub const TEMPLATE_MARKER: &str = "CPFSFloatingZone";

/// 模板无效时写回 `xlsx_file` 的说明
pub const INVALID_TEMPLATE_NOTE: &str = "Not a valid CPFSFloatingZoneProcess template.";

mod layout {
    pub const MARKER: (usize, usize) = (2, 1);
    pub const NAME: (usize, usize) = (10, 2);
    pub const FURNACE: (usize, usize) = (13, 2);

    pub const ROD_PREPARATION: (usize, usize) = (16, 2);
    pub const SEED_ROD_DIAMETER: (usize, usize) = (17, 2);
    pub const FEED_ROD_DIAMETER: (usize, usize) = (18, 2);
    pub const FEED_ROD_DIRECTION: (usize, usize) = (19, 2);

    pub const COMPONENT_FIRST_ROW: usize = 24;
    pub const COMPONENT_ROWS: usize = 5;
    pub const COMPONENT_NAME_COL: usize = 1;
    pub const COMPONENT_STATE_COL: usize = 2;
    pub const COMPONENT_WEIGHT_COL: usize = 3;
    pub const COMPONENT_COMPANY_COL: usize = 4;

    pub const MELTING_POWER: (usize, usize) = (31, 2);
    pub const GROWTH_POWER: (usize, usize) = (32, 2);
    pub const ROTATION_SPEED: (usize, usize) = (33, 2);
    pub const ROTATION_DIRECTION: (usize, usize) = (34, 2);
    pub const PULLING_RATE: (usize, usize) = (35, 2);

    pub const SAMPLE_ID: (usize, usize) = (38, 2);
    pub const COMPOSITION: (usize, usize) = (39, 2);
    pub const CRYSTAL_LENGTH: (usize, usize) = (40, 2);
    pub const SINGLE_POLY: (usize, usize) = (41, 2);
    pub const SHAPE: (usize, usize) = (42, 2);
    pub const ORIENTATION: (usize, usize) = (43, 2);
    pub const SAFETY: (usize, usize) = (44, 2);
    pub const REMARKS: (usize, usize) = (45, 2);
}

const MM_TO_M: f64 = 1.0 / 1000.0;
const PER_MINUTE_TO_PER_SECOND: f64 = 1.0 / 60.0;

/// 模板导入得到的晶体记录
#[derive(Debug, Clone)]
pub struct ImportedCrystal {
    pub crystal: Crystal,
    /// 晶体存档文件名，同时作为工艺中的引用
    pub file_name: String,
}

/// 检查模板标识
pub fn is_floating_zone_template(grid: &TemplateGrid) -> bool {
    let (row, col) = layout::MARKER;
    grid.cell(row, col)
        .and_then(|c| c.split_whitespace().nth(1))
        .map(|word| word == TEMPLATE_MARKER)
        .unwrap_or(false)
}

/// 将模板内容写入工艺记录，返回需要单独保存的晶体记录
///
/// 所有单元格解析成功后才修改 `process`；出错时记录保持原样。
/// `source` 仅用于错误信息。
pub fn apply_template(
    process: &mut FloatingZoneProcess,
    grid: &TemplateGrid,
    source: &str,
    ctx: &NormalizeContext,
) -> Result<ImportedCrystal> {
    if !is_floating_zone_template(grid) {
        return Err(CpfsError::InvalidTemplate {
            expected: "CPFSFloatingZoneProcess".to_string(),
            path: source.to_string(),
        });
    }

    let at = |(row, col): (usize, usize)| grid.text(row, col);
    let num = |(row, col): (usize, usize)| grid.number(row, col);

    let furnace = match at(layout::FURNACE) {
        Some(name) => {
            let (row, col) = layout::FURNACE;
            let name = name
                .parse::<FurnaceName>()
                .map_err(|reason| CpfsError::TemplateCell { row, col, reason })?;
            let mut furnace = Furnace::new(name);
            furnace.normalize(ctx);
            Some(furnace)
        }
        None => None,
    };

    let rod_information = RodInformation {
        rod_preparation: at(layout::ROD_PREPARATION),
        seed_rod_diameter_m: num(layout::SEED_ROD_DIAMETER)?.map(|v| v * MM_TO_M),
        feed_rod_diameter_m: num(layout::FEED_ROD_DIAMETER)?.map(|v| v * MM_TO_M),
        feed_rod_crystal_direction: at(layout::FEED_ROD_DIRECTION),
    };

    let step = PullingStep {
        melting_power_percent: num(layout::MELTING_POWER)?,
        growth_power_percent: num(layout::GROWTH_POWER)?,
        rotation_speed_hz: num(layout::ROTATION_SPEED)?,
        rotation_direction: at(layout::ROTATION_DIRECTION),
        pulling_rate_m_per_s: num(layout::PULLING_RATE)?
            .map(|v| v * MM_TO_M * PER_MINUTE_TO_PER_SECOND),
        ..Default::default()
    };

    let initial_materials = read_components(grid, ctx)?;

    let mut crystal = Crystal {
        sample_id: at(layout::SAMPLE_ID),
        achieved_composition: at(layout::COMPOSITION),
        final_crystal_length_m: num(layout::CRYSTAL_LENGTH)?.map(|v| v * MM_TO_M),
        single_poly: at(layout::SINGLE_POLY),
        crystal_shape: at(layout::SHAPE),
        crystal_orientation: at(layout::ORIENTATION),
        safety_reactivity: at(layout::SAFETY),
        description: at(layout::REMARKS),
        ..Default::default()
    };
    crystal.normalize(ctx);

    let stem = crystal.name.as_deref().unwrap_or("crystal");
    let file_name = archive::archive_file_name(stem, "CPFSCrystal");

    process.header.name = at(layout::NAME);
    process.furnace = furnace;
    process.rod_information = Some(rod_information);
    process.steps = vec![step];
    process.initial_materials = initial_materials;
    process.resulting_crystal = Some(file_name.clone());

    tracing::info!(
        process = ?process.header.name,
        components = process.initial_materials.len(),
        crystal = %file_name,
        "imported floating zone template"
    );

    Ok(ImportedCrystal { crystal, file_name })
}

fn read_components(
    grid: &TemplateGrid,
    ctx: &NormalizeContext,
) -> Result<Vec<InitialSynthesisComponent>> {
    let mut components = Vec::new();

    for row in layout::COMPONENT_FIRST_ROW..layout::COMPONENT_FIRST_ROW + layout::COMPONENT_ROWS {
        let Some(name) = grid.text(row, layout::COMPONENT_NAME_COL) else {
            continue;
        };

        let state = grid
            .cell(row, layout::COMPONENT_STATE_COL)
            .map(|s| s.parse::<ComponentState>())
            .transpose()
            .map_err(|reason| CpfsError::TemplateCell {
                row,
                col: layout::COMPONENT_STATE_COL,
                reason,
            })?;

        let mut component = InitialSynthesisComponent {
            name: Some(name),
            state,
            weight_g: grid.number(row, layout::COMPONENT_WEIGHT_COL)?,
            providing_company: grid.text(row, layout::COMPONENT_COMPANY_COL),
            ..Default::default()
        };
        component.normalize(ctx);
        components.push(component);
    }

    Ok(components)
}

/// 构造一个 46 行的模板 CSV，`cells` 中的 (行, 列, 值) 覆盖默认空白
#[cfg(test)]
pub(crate) fn template_csv(cells: &[(usize, usize, &str)]) -> String {
    let mut rows = vec![vec![String::new(); 5]; 46];
    for (r, c, v) in cells {
        rows[*r][*c] = v.to_string();
    }
    let mut csv = String::from("h0,h1,h2,h3,h4\n");
    for row in rows {
        csv.push_str(&row.join(","));
        csv.push('\n');
    }
    csv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(cells: &[(usize, usize, &str)]) -> TemplateGrid {
        TemplateGrid::from_reader(template_csv(cells).as_bytes()).unwrap()
    }

    fn full_template() -> TemplateGrid {
        template(&[
            (2, 1, "Template CPFSFloatingZone v2"),
            (10, 2, "FZ-2024-017"),
            (13, 2, "Furnace2"),
            (16, 2, "pressed and sintered"),
            (17, 2, "6"),
            (18, 2, "7.5"),
            (19, 2, "[001]"),
            (24, 1, "Co3Sn2S2"),
            (24, 2, "Powder"),
            (24, 3, "4.2"),
            (24, 4, "Alfa Aesar"),
            (26, 1, "S"),
            (26, 2, "Pieces"),
            (26, 3, "0.3"),
            (31, 2, "55"),
            (32, 2, "48.5"),
            (33, 2, "0.25"),
            (34, 2, "counter"),
            (35, 2, "6"),
            (38, 2, "SC-17"),
            (39, 2, "Co3Sn2S2"),
            (40, 2, "42"),
            (41, 2, "single"),
            (42, 2, "rod"),
            (43, 2, "[001]"),
            (44, 2, "stable in air"),
            (45, 2, "small cracks"),
        ])
    }

    #[test]
    fn test_marker_detection() {
        assert!(is_floating_zone_template(&full_template()));
        assert!(!is_floating_zone_template(&template(&[(2, 1, "Template CPFSBridgman")])));
        assert!(!is_floating_zone_template(&template(&[])));
    }

    #[test]
    fn test_apply_template_maps_cells() {
        let grid = full_template();
        let ctx = NormalizeContext::default();
        let mut process = FloatingZoneProcess::default();

        let imported = apply_template(&mut process, &grid, "fz.csv", &ctx).unwrap();

        assert_eq!(process.header.name.as_deref(), Some("FZ-2024-017"));

        let furnace = process.furnace.as_ref().unwrap();
        assert_eq!(furnace.name, Some(FurnaceName::Furnace2));
        assert_eq!(furnace.material.as_deref(), Some("Cast Iron"));

        let rod = process.rod_information.as_ref().unwrap();
        assert!((rod.seed_rod_diameter_m.unwrap() - 0.006).abs() < 1e-12);
        assert!((rod.feed_rod_diameter_m.unwrap() - 0.0075).abs() < 1e-12);
        assert_eq!(rod.feed_rod_crystal_direction.as_deref(), Some("[001]"));

        assert_eq!(process.steps.len(), 1);
        let step = &process.steps[0];
        assert_eq!(step.melting_power_percent, Some(55.0));
        assert_eq!(step.rotation_direction.as_deref(), Some("counter"));
        // 6 mm/min = 1e-4 m/s
        assert!((step.pulling_rate_m_per_s.unwrap() - 1.0e-4).abs() < 1e-12);

        // 空白的第 25 行被跳过
        assert_eq!(process.initial_materials.len(), 2);
        let first = &process.initial_materials[0];
        assert_eq!(first.state, Some(ComponentState::Powder));
        assert_eq!(first.weight_g, Some(4.2));
        assert_eq!(first.elemental_composition.len(), 3);
        assert_eq!(process.initial_materials[1].name.as_deref(), Some("S"));

        assert_eq!(imported.crystal.name.as_deref(), Some("SC-17_Co3Sn2S2"));
        assert!((imported.crystal.final_crystal_length_m.unwrap() - 0.042).abs() < 1e-12);
        assert_eq!(imported.crystal.description.as_deref(), Some("small cracks"));
        assert_eq!(imported.file_name, "SC-17_Co3Sn2S2_CPFSCrystal.archive.json");
        assert_eq!(
            process.resulting_crystal.as_deref(),
            Some("SC-17_Co3Sn2S2_CPFSCrystal.archive.json")
        );
    }

    #[test]
    fn test_invalid_template_is_rejected() {
        let grid = template(&[(2, 1, "Template Other")]);
        let mut process = FloatingZoneProcess::default();
        let result = apply_template(&mut process, &grid, "x.csv", &NormalizeContext::default());

        assert!(matches!(result, Err(CpfsError::InvalidTemplate { .. })));
        assert!(process.steps.is_empty());
    }

    #[test]
    fn test_bad_number_reports_cell() {
        let grid = template(&[(2, 1, "T CPFSFloatingZone"), (17, 2, "six")]);
        let mut process = FloatingZoneProcess::default();
        let result = apply_template(&mut process, &grid, "x.csv", &NormalizeContext::default());

        assert!(matches!(
            result,
            Err(CpfsError::TemplateCell { row: 17, col: 2, .. })
        ));
    }

    #[test]
    fn test_failed_import_leaves_process_untouched() {
        let grid = template(&[
            (2, 1, "T CPFSFloatingZone"),
            (10, 2, "FZ-new"),
            (13, 2, "Furnace1"),
            (17, 2, "6"),
            (40, 2, "long"),
        ]);
        let mut process = FloatingZoneProcess::default();
        process.header.name = Some("FZ-old".to_string());
        let before = process.clone();

        let result = apply_template(&mut process, &grid, "x.csv", &NormalizeContext::default());

        assert!(matches!(
            result,
            Err(CpfsError::TemplateCell { row: 40, col: 2, .. })
        ));
        assert_eq!(process, before);
    }

    #[test]
    fn test_unknown_furnace_reports_cell() {
        let grid = template(&[(2, 1, "T CPFSFloatingZone"), (13, 2, "Furnace9")]);
        let mut process = FloatingZoneProcess::default();
        let result = apply_template(&mut process, &grid, "x.csv", &NormalizeContext::default());

        assert!(matches!(
            result,
            Err(CpfsError::TemplateCell { row: 13, col: 2, .. })
        ));
    }
}
