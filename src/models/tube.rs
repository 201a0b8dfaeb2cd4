//! # 晶体生长管
//!
//! 按管型从静态表补全材质、直径 (m) 和填充物。
//!
//! ## 依赖关系
//! - 被 `models/process/cvt.rs` 使用
//! - 使用 `resolver.rs`

use super::{Extra, Normalize, NormalizeContext};
use crate::resolver::{self, AttributeTable};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 生长管类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TubeType {
    TubeType1,
    TubeType2,
    TubeType3,
}

impl std::fmt::Display for TubeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TubeType::TubeType1 => write!(f, "TubeType1"),
            TubeType::TubeType2 => write!(f, "TubeType2"),
            TubeType::TubeType3 => write!(f, "TubeType3"),
        }
    }
}

/// 生长管属性表，直径单位 m
pub static TUBE_TABLE: AttributeTable<TubeType, 3> = AttributeTable {
    columns: ["Material", "Diameter (m)", "Filling"],
    rows: &[
        (TubeType::TubeType1, ["Quartz", "0.011", "Vacuum"]),
        (TubeType::TubeType2, ["Tantalum", "0.012", "Iodine"]),
        (TubeType::TubeType3, ["Quartz", "0.010", ""]),
    ],
};

/// 晶体生长管
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrystalGrowthTube {
    pub name: Option<TubeType>,

    /// 管材
    pub material: Option<String>,

    /// 直径 (m)
    pub diameter_m: Option<f64>,

    /// 填充物（真空、输运剂等）
    pub filling: Option<String>,

    pub datetime: Option<DateTime<Utc>>,
    pub lab_id: Option<String>,
    pub description: Option<String>,

    /// 未识别的字段，写回时原样保留
    #[serde(flatten)]
    pub extra: Extra,
}

impl CrystalGrowthTube {
    pub fn new(name: TubeType) -> Self {
        CrystalGrowthTube {
            name: Some(name),
            ..Default::default()
        }
    }
}

impl Normalize for CrystalGrowthTube {
    fn normalize(&mut self, _ctx: &NormalizeContext) {
        if resolver::resolve(
            self.name.as_ref(),
            &TUBE_TABLE,
            [&mut self.material, &mut self.diameter_m, &mut self.filling],
        ) {
            tracing::debug!(tube = ?self.name, "resolved tube attributes");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tube_resolves_diameter_in_metres() {
        let mut tube = CrystalGrowthTube::new(TubeType::TubeType2);
        tube.normalize(&NormalizeContext::default());

        assert_eq!(tube.material.as_deref(), Some("Tantalum"));
        assert!((tube.diameter_m.unwrap() - 0.012).abs() < 1e-12);
        assert_eq!(tube.filling.as_deref(), Some("Iodine"));
    }

    #[test]
    fn test_tube_type3_has_no_filling() {
        let mut tube = CrystalGrowthTube::new(TubeType::TubeType3);
        tube.normalize(&NormalizeContext::default());
        tube.normalize(&NormalizeContext::default());

        assert_eq!(tube.material.as_deref(), Some("Quartz"));
        assert_eq!(tube.diameter_m, Some(0.010));
        assert_eq!(tube.filling, None);
    }
}
