//! # 数据模型模块
//!
//! 定义晶体生长实验记录的 schema：仪器（炉子、生长管、坩埚）、
//! 样品（晶体、初始原料）以及各类生长工艺。
//!
//! 每个记录实现 [`Normalize`]，在保存前补全派生值和默认值。
//!
//! ## 依赖关系
//! - 被 `archive.rs`, `ingest/` 和 `commands/` 使用
//! - 使用 `resolver.rs`（仪器查表）和 `formula.rs`（化学式分解）
//! - 子模块: furnace, tube, crucible, crystal, component, process

pub mod component;
pub mod crucible;
pub mod crystal;
pub mod furnace;
pub mod process;
pub mod tube;

pub use component::{ComponentState, InitialSynthesisComponent};
pub use crucible::{Crucible, CrucibleType};
pub use crystal::Crystal;
pub use furnace::{Furnace, FurnaceName};
pub use process::{
    BridgmanProcess, ChemicalVapourTransport, CzochralskiProcess, FloatingZoneProcess,
    FluxGrowthProcess, RodInformation,
};
pub use tube::{CrystalGrowthTube, TubeType};

/// 记录中未建模的字段，读入后原样写回
pub type Extra = serde_json::Map<String, serde_json::Value>;

/// 默认实验地点
pub const DEFAULT_LOCATION: &str = "MPI CPfS Dresden";

/// 规范化上下文
#[derive(Debug, Clone)]
pub struct NormalizeContext {
    /// 工艺记录缺省时填入的实验地点
    pub location: String,
}

impl Default for NormalizeContext {
    fn default() -> Self {
        NormalizeContext {
            location: DEFAULT_LOCATION.to_string(),
        }
    }
}

/// 规范化钩子：补全派生值和默认值
///
/// 实现必须是幂等的，重复调用得到相同结果。
pub trait Normalize {
    fn normalize(&mut self, ctx: &NormalizeContext);
}

impl<T: Normalize> Normalize for Option<T> {
    fn normalize(&mut self, ctx: &NormalizeContext) {
        if let Some(inner) = self {
            inner.normalize(ctx);
        }
    }
}

impl<T: Normalize> Normalize for Vec<T> {
    fn normalize(&mut self, ctx: &NormalizeContext) {
        for item in self.iter_mut() {
            item.normalize(ctx);
        }
    }
}
