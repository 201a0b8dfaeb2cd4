//! # 晶体生长工艺
//!
//! 五种生长工艺共享同一个记录头（名称、时间、地点、方法），
//! 各自携带仪器、原料和工艺步骤子记录。
//!
//! ## 工艺
//! - `cvt`: 化学气相输运 (Chemical Vapour Transport)
//! - `floating_zone`: 浮区法
//! - `bridgman`: 布里奇曼法
//! - `czochralski`: 提拉法
//! - `flux_growth`: 助熔剂法
//!
//! 工艺的规范化会填充默认方法与地点，然后级联规范化所有子记录。
//!
//! ## 依赖关系
//! - 被 `archive.rs`, `ingest/floating_zone.rs` 使用
//! - 使用 `models/` 下的仪器与样品记录

pub mod bridgman;
pub mod cvt;
pub mod czochralski;
pub mod floating_zone;
pub mod flux_growth;

pub use bridgman::{BridgmanProcess, BridgmanStep};
pub use cvt::{ChemicalVapourTransport, CvtStep};
pub use czochralski::CzochralskiProcess;
pub use floating_zone::{FloatingZoneProcess, RodInformation};
pub use flux_growth::{FluxGrowthProcess, FluxGrowthStep};

use super::NormalizeContext;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 工艺记录头
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessHeader {
    pub name: Option<String>,

    /// 开始时间
    pub datetime: Option<DateTime<Utc>>,

    pub end_time: Option<DateTime<Utc>>,

    /// 实验地点
    pub location: Option<String>,

    /// 生长方法
    pub method: Option<String>,

    pub lab_id: Option<String>,
    pub description: Option<String>,
}

/// 地点默认值的填充方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationPolicy {
    /// 仅在未设置时填充
    IfMissing,
    /// 总是使用上下文中的地点
    Always,
}

impl ProcessHeader {
    pub fn with_method(method: &str) -> Self {
        ProcessHeader {
            method: Some(method.to_string()),
            ..Default::default()
        }
    }

    /// 填充方法与地点默认值
    pub fn apply_defaults(&mut self, method: &str, ctx: &NormalizeContext, policy: LocationPolicy) {
        if self.method.is_none() {
            self.method = Some(method.to_string());
        }

        let fill = match policy {
            LocationPolicy::IfMissing => self.location.is_none(),
            LocationPolicy::Always => true,
        };
        if fill {
            self.location = Some(ctx.location.clone());
        }
    }
}

/// 工艺步骤的通用字段
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepInfo {
    pub name: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub comment: Option<String>,
}

/// 拉晶步骤：浮区法与提拉法共用
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PullingStep {
    #[serde(flatten)]
    pub info: StepInfo,

    /// 熔化功率 (%)
    pub melting_power_percent: Option<f64>,

    /// 生长功率 (%)
    pub growth_power_percent: Option<f64>,

    /// 转速 (Hz)
    pub rotation_speed_hz: Option<f64>,

    pub rotation_direction: Option<String>,

    /// 拉速 (m/s)
    pub pulling_rate_m_per_s: Option<f64>,
}
