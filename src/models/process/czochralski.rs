//! # 提拉法 (Czochralski)
//!
//! 步骤字段与浮区法相同，额外带坩埚。
//!
//! ## 依赖关系
//! - 被 `models/process/mod.rs` 使用
//! - 使用 `models/furnace.rs`, `models/crucible.rs`, `models/component.rs`

use super::{LocationPolicy, ProcessHeader, PullingStep};
use crate::models::{Extra, Crucible, Furnace, InitialSynthesisComponent, Normalize, NormalizeContext};

use serde::{Deserialize, Serialize};

pub const CZOCHRALSKI_METHOD: &str = "Czochralski Process";

/// 提拉法生长
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CzochralskiProcess {
    #[serde(flatten)]
    pub header: ProcessHeader,

    pub furnace: Option<Furnace>,
    pub crucible: Option<Crucible>,

    /// 籽晶晶向
    pub seed_orientation: Option<String>,

    pub initial_materials: Vec<InitialSynthesisComponent>,
    pub steps: Vec<PullingStep>,
    pub resulting_crystal: Option<String>,

    /// 未识别的字段，写回时原样保留
    #[serde(flatten)]
    pub extra: Extra,
}

impl Default for CzochralskiProcess {
    fn default() -> Self {
        CzochralskiProcess {
            header: ProcessHeader::with_method(CZOCHRALSKI_METHOD),
            furnace: None,
            crucible: None,
            seed_orientation: None,
            initial_materials: Vec::new(),
            steps: Vec::new(),
            resulting_crystal: None,
            extra: Extra::new(),
        }
    }
}

impl Normalize for CzochralskiProcess {
    fn normalize(&mut self, ctx: &NormalizeContext) {
        self.header
            .apply_defaults(CZOCHRALSKI_METHOD, ctx, LocationPolicy::IfMissing);

        self.furnace.normalize(ctx);
        self.crucible.normalize(ctx);
        self.initial_materials.normalize(ctx);
    }
}
