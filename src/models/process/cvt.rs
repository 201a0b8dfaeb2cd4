//! # 化学气相输运 (CVT)
//!
//! 原料与输运剂封入生长管，在高低温两端之间输运结晶。
//!
//! ## 依赖关系
//! - 被 `models/process/mod.rs` 使用
//! - 使用 `models/tube.rs`, `models/component.rs`

use super::{LocationPolicy, ProcessHeader, StepInfo};
use crate::models::{Extra, CrystalGrowthTube, InitialSynthesisComponent, Normalize, NormalizeContext};

use serde::{Deserialize, Serialize};

pub const CVT_METHOD: &str = "Chemical Vapour Transport";
pub const DEFAULT_GROWER: &str = "Sushmita Chandra";

/// CVT 步骤：两端温度与持续时间
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CvtStep {
    #[serde(flatten)]
    pub info: StepInfo,

    /// 低温端 (K)
    pub temperature_low_k: Option<f64>,

    /// 高温端 (K)
    pub temperature_high_k: Option<f64>,

    /// 持续时间 (h)
    pub duration_h: Option<f64>,
}

/// 化学气相输运
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChemicalVapourTransport {
    #[serde(flatten)]
    pub header: ProcessHeader,

    pub grower: Option<String>,

    /// 目标材料
    pub target_material: Option<String>,

    pub tube: Option<CrystalGrowthTube>,
    pub initial_materials: Vec<InitialSynthesisComponent>,
    pub transport_agent: Option<InitialSynthesisComponent>,
    pub step: Option<CvtStep>,

    /// 生成晶体的存档引用
    pub resulting_crystal: Option<String>,

    /// 未识别的字段，写回时原样保留
    #[serde(flatten)]
    pub extra: Extra,
}

impl Default for ChemicalVapourTransport {
    fn default() -> Self {
        ChemicalVapourTransport {
            header: ProcessHeader::with_method(CVT_METHOD),
            grower: Some(DEFAULT_GROWER.to_string()),
            target_material: None,
            tube: None,
            initial_materials: Vec::new(),
            transport_agent: None,
            step: None,
            resulting_crystal: None,
            extra: Extra::new(),
        }
    }
}

impl Normalize for ChemicalVapourTransport {
    fn normalize(&mut self, ctx: &NormalizeContext) {
        self.header
            .apply_defaults(CVT_METHOD, ctx, LocationPolicy::IfMissing);
        // CVT 记录不带结束时间
        self.header.end_time = None;

        self.tube.normalize(ctx);
        self.initial_materials.normalize(ctx);
        self.transport_agent.normalize(ctx);
    }
}
