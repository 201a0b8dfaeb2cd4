//! # 浮区法 (Floating Zone)
//!
//! 记录可以附带一个表格模板文件 (`xlsx_file`)，
//! 由 `ingest/floating_zone.rs` 导入到结构化字段。
//!
//! ## 依赖关系
//! - 被 `models/process/mod.rs` 和 `ingest/floating_zone.rs` 使用
//! - 使用 `models/furnace.rs`, `models/component.rs`

use super::{LocationPolicy, ProcessHeader, PullingStep};
use crate::models::{Extra, Furnace, InitialSynthesisComponent, Normalize, NormalizeContext};

use serde::{Deserialize, Serialize};

pub const FLOATING_ZONE_METHOD: &str = "Floating Zone Process";

/// 料棒信息
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RodInformation {
    /// 料棒预处理
    pub rod_preparation: Option<String>,

    /// 籽晶棒直径 (m)
    pub seed_rod_diameter_m: Option<f64>,

    /// 料棒直径 (m)
    pub feed_rod_diameter_m: Option<f64>,

    /// 料棒晶向
    pub feed_rod_crystal_direction: Option<String>,
}

/// 浮区法生长
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatingZoneProcess {
    #[serde(flatten)]
    pub header: ProcessHeader,

    pub furnace: Option<Furnace>,
    pub rod_information: Option<RodInformation>,
    pub initial_materials: Vec<InitialSynthesisComponent>,
    pub steps: Vec<PullingStep>,
    pub resulting_crystal: Option<String>,

    /// 表格模板文件，相对于存档所在目录
    pub xlsx_file: Option<String>,

    /// 未识别的字段，写回时原样保留
    #[serde(flatten)]
    pub extra: Extra,
}

impl Default for FloatingZoneProcess {
    fn default() -> Self {
        FloatingZoneProcess {
            header: ProcessHeader::with_method(FLOATING_ZONE_METHOD),
            furnace: None,
            rod_information: None,
            initial_materials: Vec::new(),
            steps: Vec::new(),
            resulting_crystal: None,
            xlsx_file: None,
            extra: Extra::new(),
        }
    }
}

impl Normalize for FloatingZoneProcess {
    fn normalize(&mut self, ctx: &NormalizeContext) {
        self.header
            .apply_defaults(FLOATING_ZONE_METHOD, ctx, LocationPolicy::Always);

        self.furnace.normalize(ctx);
        self.initial_materials.normalize(ctx);
    }
}
