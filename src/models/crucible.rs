//! # 坩埚
//!
//! 按坩埚类型从静态表补全材质和直径 (m)。
//!
//! ## 依赖关系
//! - 被 `models/process/` 中的 Bridgman、Czochralski、助熔剂法使用
//! - 使用 `resolver.rs`

use super::{Extra, Normalize, NormalizeContext};
use crate::resolver::{self, AttributeTable};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 坩埚类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrucibleType {
    CrucibleType1,
    CrucibleType2,
    CrucibleType3,
}

impl std::fmt::Display for CrucibleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CrucibleType::CrucibleType1 => write!(f, "CrucibleType1"),
            CrucibleType::CrucibleType2 => write!(f, "CrucibleType2"),
            CrucibleType::CrucibleType3 => write!(f, "CrucibleType3"),
        }
    }
}

/// 坩埚属性表，直径单位 m
pub static CRUCIBLE_TABLE: AttributeTable<CrucibleType, 2> = AttributeTable {
    columns: ["Material", "Diameter (m)"],
    rows: &[
        (CrucibleType::CrucibleType1, ["Al", "0.011"]),
        (CrucibleType::CrucibleType2, ["Tantalum", "0.012"]),
        (CrucibleType::CrucibleType3, ["Al", "0.010"]),
    ],
};

/// 坩埚
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Crucible {
    pub name: Option<CrucibleType>,
    pub material: Option<String>,

    /// 直径 (m)
    pub diameter_m: Option<f64>,

    pub datetime: Option<DateTime<Utc>>,
    pub lab_id: Option<String>,
    pub description: Option<String>,

    /// 未识别的字段，写回时原样保留
    #[serde(flatten)]
    pub extra: Extra,
}

impl Crucible {
    pub fn new(name: CrucibleType) -> Self {
        Crucible {
            name: Some(name),
            ..Default::default()
        }
    }
}

impl Normalize for Crucible {
    fn normalize(&mut self, _ctx: &NormalizeContext) {
        if resolver::resolve(
            self.name.as_ref(),
            &CRUCIBLE_TABLE,
            [&mut self.material, &mut self.diameter_m],
        ) {
            tracing::debug!(crucible = ?self.name, "resolved crucible attributes");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crucible_resolves() {
        let mut crucible = Crucible::new(CrucibleType::CrucibleType3);
        crucible.normalize(&NormalizeContext::default());

        assert_eq!(crucible.material.as_deref(), Some("Al"));
        assert_eq!(crucible.diameter_m, Some(0.010));
    }

    #[test]
    fn test_crucible_overwrites_manual_values() {
        let mut crucible = Crucible::new(CrucibleType::CrucibleType2);
        crucible.material = Some("Graphite".to_string());
        crucible.normalize(&NormalizeContext::default());

        assert_eq!(crucible.material.as_deref(), Some("Tantalum"));
    }
}
