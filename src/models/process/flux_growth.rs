//! # 助熔剂法 (Flux Growth)
//!
//! 原料溶于助熔剂，在坩埚中缓慢降温析出晶体。
//!
//! ## 依赖关系
//! - 被 `models/process/mod.rs` 使用
//! - 使用 `models/furnace.rs`, `models/crucible.rs`, `models/component.rs`

use super::{LocationPolicy, ProcessHeader, StepInfo};
use crate::models::{Extra, Crucible, Furnace, InitialSynthesisComponent, Normalize, NormalizeContext};

use serde::{Deserialize, Serialize};

pub const FLUX_GROWTH_METHOD: &str = "Flux Growth";

/// 助熔剂法温度程序中的一段
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FluxGrowthStep {
    #[serde(flatten)]
    pub info: StepInfo,

    /// 目标温度 (K)
    pub temperature_k: Option<f64>,

    /// 升温速率 (K/h)
    pub heating_rate_k_per_h: Option<f64>,

    /// 降温速率 (K/h)
    pub cooling_rate_k_per_h: Option<f64>,

    /// 保温时间 (h)
    pub duration_h: Option<f64>,
}

/// 助熔剂法生长
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FluxGrowthProcess {
    #[serde(flatten)]
    pub header: ProcessHeader,

    pub furnace: Option<Furnace>,
    pub crucible: Option<Crucible>,
    pub initial_materials: Vec<InitialSynthesisComponent>,

    /// 助熔剂
    pub flux: Vec<InitialSynthesisComponent>,

    pub steps: Vec<FluxGrowthStep>,
    pub resulting_crystal: Option<String>,

    /// 未识别的字段，写回时原样保留
    #[serde(flatten)]
    pub extra: Extra,
}

impl Default for FluxGrowthProcess {
    fn default() -> Self {
        FluxGrowthProcess {
            header: ProcessHeader::with_method(FLUX_GROWTH_METHOD),
            furnace: None,
            crucible: None,
            initial_materials: Vec::new(),
            flux: Vec::new(),
            steps: Vec::new(),
            resulting_crystal: None,
            extra: Extra::new(),
        }
    }
}

impl Normalize for FluxGrowthProcess {
    fn normalize(&mut self, ctx: &NormalizeContext) {
        self.header
            .apply_defaults(FLUX_GROWTH_METHOD, ctx, LocationPolicy::IfMissing);

        self.furnace.normalize(ctx);
        self.crucible.normalize(ctx);
        self.initial_materials.normalize(ctx);
        self.flux.normalize(ctx);
    }
}
