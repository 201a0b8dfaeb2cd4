//! # 晶体样品
//!
//! 生长得到的晶体记录，由工艺记录以存档文件名引用。
//!
//! ## 依赖关系
//! - 被 `models/process/` 和 `ingest/floating_zone.rs` 使用
//! - 无外部模块依赖

use super::{Extra, Normalize, NormalizeContext};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 晶体
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Crystal {
    pub name: Option<String>,

    /// 生长者给出的样品编号
    pub sample_id: Option<String>,

    /// 内部样品编号
    pub internal_sample_id: Option<String>,

    /// 实际得到的成分
    pub achieved_composition: Option<String>,

    /// 最终晶体长度 (m)
    pub final_crystal_length_m: Option<f64>,

    /// 单晶 / 多晶
    pub single_poly: Option<String>,

    pub crystal_shape: Option<String>,
    pub crystal_orientation: Option<String>,
    pub safety_reactivity: Option<String>,

    pub datetime: Option<DateTime<Utc>>,
    pub lab_id: Option<String>,

    /// 备注
    pub description: Option<String>,

    /// 未识别的字段，写回时原样保留
    #[serde(flatten)]
    pub extra: Extra,
}

impl Crystal {
    /// `<样品编号>_<成分>`，两者都存在时才有意义
    pub fn derived_name(&self) -> Option<String> {
        match (&self.sample_id, &self.achieved_composition) {
            (Some(id), Some(comp)) => Some(format!("{}_{}", id, comp)),
            _ => None,
        }
    }
}

impl Normalize for Crystal {
    fn normalize(&mut self, _ctx: &NormalizeContext) {
        if self.name.is_none() {
            self.name = self.derived_name();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crystal_name_derived_from_sample() {
        let mut crystal = Crystal {
            sample_id: Some("SC-042".to_string()),
            achieved_composition: Some("Co3Sn2S2".to_string()),
            ..Default::default()
        };
        crystal.normalize(&NormalizeContext::default());
        assert_eq!(crystal.name.as_deref(), Some("SC-042_Co3Sn2S2"));
    }

    #[test]
    fn test_crystal_keeps_explicit_name() {
        let mut crystal = Crystal {
            name: Some("boule A".to_string()),
            sample_id: Some("SC-042".to_string()),
            achieved_composition: Some("MnSi".to_string()),
            ..Default::default()
        };
        crystal.normalize(&NormalizeContext::default());
        assert_eq!(crystal.name.as_deref(), Some("boule A"));
    }
}
