//! # 初始合成原料
//!
//! 原料记录以化学式作为名称，规范化时分解为元素原子分数。
//!
//! ## 依赖关系
//! - 被 `models/process/` 和 `ingest/floating_zone.rs` 使用
//! - 使用 `formula.rs`

use super::{Extra, Normalize, NormalizeContext};
use crate::formula::{self, ElementalComposition};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 原料形态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComponentState {
    Powder,
    Polycrystal,
    Plate,
    Pieces,
}

impl std::fmt::Display for ComponentState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComponentState::Powder => write!(f, "Powder"),
            ComponentState::Polycrystal => write!(f, "Polycrystal"),
            ComponentState::Plate => write!(f, "Plate"),
            ComponentState::Pieces => write!(f, "Pieces"),
        }
    }
}

impl std::str::FromStr for ComponentState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Powder" => Ok(ComponentState::Powder),
            "Polycrystal" => Ok(ComponentState::Polycrystal),
            "Plate" => Ok(ComponentState::Plate),
            "Pieces" => Ok(ComponentState::Pieces),
            other => Err(format!("unknown component state '{}'", other)),
        }
    }
}

/// 初始合成原料
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialSynthesisComponent {
    /// 化学式，如 `Fe2O3`
    pub name: Option<String>,

    pub state: Option<ComponentState>,

    /// 质量 (g)
    pub weight_g: Option<f64>,

    /// 供应商
    pub providing_company: Option<String>,

    /// 由名称推导的元素组成
    pub elemental_composition: Vec<ElementalComposition>,

    pub datetime: Option<DateTime<Utc>>,
    pub lab_id: Option<String>,
    pub description: Option<String>,

    /// 未识别的字段，写回时原样保留
    #[serde(flatten)]
    pub extra: Extra,
}

impl InitialSynthesisComponent {
    pub fn new(name: impl Into<String>) -> Self {
        InitialSynthesisComponent {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

impl Normalize for InitialSynthesisComponent {
    fn normalize(&mut self, _ctx: &NormalizeContext) {
        let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) else {
            return;
        };

        self.elemental_composition = formula::parse(name);
        tracing::debug!(
            component = name,
            composition = %formula::format_composition(&self.elemental_composition),
            "derived elemental composition"
        );
    }
}
