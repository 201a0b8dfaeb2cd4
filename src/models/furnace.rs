//! # 炉子
//!
//! 炉子记录按型号名从静态表补全型号、材质、几何形状和加热方式。
//!
//! ## 依赖关系
//! - 被 `models/process/` 使用
//! - 使用 `resolver.rs`

use super::{Extra, Normalize, NormalizeContext};
use crate::resolver::{self, AttributeTable};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 炉子型号名
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FurnaceName {
    Furnace1,
    Furnace2,
    Furnace3,
}

impl std::fmt::Display for FurnaceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FurnaceName::Furnace1 => write!(f, "Furnace1"),
            FurnaceName::Furnace2 => write!(f, "Furnace2"),
            FurnaceName::Furnace3 => write!(f, "Furnace3"),
        }
    }
}

impl std::str::FromStr for FurnaceName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Furnace1" => Ok(FurnaceName::Furnace1),
            "Furnace2" => Ok(FurnaceName::Furnace2),
            "Furnace3" => Ok(FurnaceName::Furnace3),
            other => Err(format!("unknown furnace '{}'", other)),
        }
    }
}

/// 炉子属性表
pub static FURNACE_TABLE: AttributeTable<FurnaceName, 4> = AttributeTable {
    columns: ["Model", "Material", "Geometry", "Heating"],
    rows: &[
        (
            FurnaceName::Furnace1,
            ["FurnaceModel1", "Steel", "Box", "Induction"],
        ),
        (
            FurnaceName::Furnace2,
            ["FurnaceModel2", "Cast Iron", "Cube", "Resistance"],
        ),
        (FurnaceName::Furnace3, ["FurnaceModel3", "Titanium", "", ""]),
    ],
};

/// 炉子
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Furnace {
    pub name: Option<FurnaceName>,

    /// 型号
    pub model: Option<String>,

    /// 材质
    pub material: Option<String>,

    /// 几何形状
    pub geometry: Option<String>,

    /// 加热方式
    pub heating: Option<String>,

    pub datetime: Option<DateTime<Utc>>,

    /// 实验室内唯一的编号
    pub lab_id: Option<String>,

    pub description: Option<String>,

    /// 未识别的字段，写回时原样保留
    #[serde(flatten)]
    pub extra: Extra,
}

impl Furnace {
    pub fn new(name: FurnaceName) -> Self {
        Furnace {
            name: Some(name),
            ..Default::default()
        }
    }
}

impl Normalize for Furnace {
    fn normalize(&mut self, _ctx: &NormalizeContext) {
        let resolved = resolver::resolve(
            self.name.as_ref(),
            &FURNACE_TABLE,
            [
                &mut self.model,
                &mut self.material,
                &mut self.geometry,
                &mut self.heating,
            ],
        );
        if resolved {
            tracing::debug!(furnace = ?self.name, "resolved furnace attributes");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_furnace_resolves_from_table() {
        let mut furnace = Furnace::new(FurnaceName::Furnace2);
        furnace.normalize(&NormalizeContext::default());

        assert_eq!(furnace.model.as_deref(), Some("FurnaceModel2"));
        assert_eq!(furnace.material.as_deref(), Some("Cast Iron"));
        assert_eq!(furnace.geometry.as_deref(), Some("Cube"));
        assert_eq!(furnace.heating.as_deref(), Some("Resistance"));
    }

    #[test]
    fn test_furnace_blank_cells_stay_empty() {
        let mut furnace = Furnace::new(FurnaceName::Furnace3);
        furnace.geometry = Some("Tube".to_string());
        furnace.normalize(&NormalizeContext::default());

        assert_eq!(furnace.material.as_deref(), Some("Titanium"));
        assert_eq!(furnace.geometry, None);
        assert_eq!(furnace.heating, None);
    }

    #[test]
    fn test_furnace_without_name_untouched() {
        let mut furnace = Furnace {
            model: Some("Homebuilt".to_string()),
            ..Default::default()
        };
        let before = furnace.clone();
        furnace.normalize(&NormalizeContext::default());
        assert_eq!(furnace, before);
    }

    #[test]
    fn test_furnace_name_from_str() {
        assert_eq!("Furnace1".parse::<FurnaceName>(), Ok(FurnaceName::Furnace1));
        assert!("Furnace7".parse::<FurnaceName>().is_err());
    }
}
