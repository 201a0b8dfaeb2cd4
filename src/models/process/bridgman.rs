//! # 布里奇曼法 (Bridgman)
//!
//! 坩埚在温度梯度中下降，熔体由底部开始定向凝固。
//!
//! ## 依赖关系
//! - 被 `models/process/mod.rs` 使用
//! - 使用 `models/furnace.rs`, `models/crucible.rs`, `models/component.rs`

use super::{LocationPolicy, ProcessHeader, StepInfo};
use crate::models::{Extra, Crucible, Furnace, InitialSynthesisComponent, Normalize, NormalizeContext};

use serde::{Deserialize, Serialize};

pub const BRIDGMAN_METHOD: &str = "Bridgman";

/// Bridgman 步骤
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgmanStep {
    #[serde(flatten)]
    pub info: StepInfo,

    /// 炉温 (K)
    pub temperature_k: Option<f64>,

    /// 坩埚下降速率 (m/s)
    pub lowering_rate_m_per_s: Option<f64>,

    /// 温度梯度 (K/m)
    pub temperature_gradient_k_per_m: Option<f64>,

    /// 持续时间 (h)
    pub duration_h: Option<f64>,
}

/// 布里奇曼法生长
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgmanProcess {
    #[serde(flatten)]
    pub header: ProcessHeader,

    pub furnace: Option<Furnace>,
    pub crucible: Option<Crucible>,
    pub initial_materials: Vec<InitialSynthesisComponent>,
    pub steps: Vec<BridgmanStep>,
    pub resulting_crystal: Option<String>,

    /// 未识别的字段，写回时原样保留
    #[serde(flatten)]
    pub extra: Extra,
}

impl Default for BridgmanProcess {
    fn default() -> Self {
        BridgmanProcess {
            header: ProcessHeader::with_method(BRIDGMAN_METHOD),
            furnace: None,
            crucible: None,
            initial_materials: Vec::new(),
            steps: Vec::new(),
            resulting_crystal: None,
            extra: Extra::new(),
        }
    }
}

impl Normalize for BridgmanProcess {
    fn normalize(&mut self, ctx: &NormalizeContext) {
        self.header
            .apply_defaults(BRIDGMAN_METHOD, ctx, LocationPolicy::IfMissing);

        self.furnace.normalize(ctx);
        self.crucible.normalize(ctx);
        self.initial_materials.normalize(ctx);
    }
}
