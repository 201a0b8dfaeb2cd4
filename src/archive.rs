//! # 存档文件
//!
//! 记录以 JSON 存档保存，`m_def` 字段标明 schema：
//! ```text
//! {
//!   "data": {
//!     "m_def": "CPFSFurnace",
//!     "name": "Furnace1",
//!     ...
//!   }
//! }
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `ingest/` 使用
//! - 使用 `models/`
//! - 使用 `serde_json` 读写

use crate::error::{CpfsError, Result};
use crate::models::{
    BridgmanProcess, ChemicalVapourTransport, Crucible, Crystal, CrystalGrowthTube,
    CzochralskiProcess, FloatingZoneProcess, FluxGrowthProcess, Furnace,
    Extra, InitialSynthesisComponent, Normalize, NormalizeContext,
};

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 存档文件后缀
pub const ARCHIVE_SUFFIX: &str = ".archive.json";

/// 存档中的记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "m_def")]
pub enum EntryData {
    #[serde(rename = "CPFSFurnace")]
    Furnace(Furnace),
    #[serde(rename = "CPFSCrystalGrowthTube")]
    Tube(CrystalGrowthTube),
    #[serde(rename = "CPFSCrucible")]
    Crucible(Crucible),
    #[serde(rename = "CPFSCrystal")]
    Crystal(Crystal),
    #[serde(rename = "CPFSInitialSynthesisComponent")]
    Component(InitialSynthesisComponent),
    #[serde(rename = "CPFSChemicalVapourTransport")]
    ChemicalVapourTransport(ChemicalVapourTransport),
    #[serde(rename = "CPFSFloatingZoneProcess")]
    FloatingZone(FloatingZoneProcess),
    #[serde(rename = "CPFSBridgmanProcess")]
    Bridgman(BridgmanProcess),
    #[serde(rename = "CPFSCzochralskiProcess")]
    Czochralski(CzochralskiProcess),
    #[serde(rename = "CPFSFluxGrowthProcess")]
    FluxGrowth(FluxGrowthProcess),
}

impl EntryData {
    /// schema 名称（即 `m_def`）
    pub fn schema(&self) -> &'static str {
        match self {
            EntryData::Furnace(_) => "CPFSFurnace",
            EntryData::Tube(_) => "CPFSCrystalGrowthTube",
            EntryData::Crucible(_) => "CPFSCrucible",
            EntryData::Crystal(_) => "CPFSCrystal",
            EntryData::Component(_) => "CPFSInitialSynthesisComponent",
            EntryData::ChemicalVapourTransport(_) => "CPFSChemicalVapourTransport",
            EntryData::FloatingZone(_) => "CPFSFloatingZoneProcess",
            EntryData::Bridgman(_) => "CPFSBridgmanProcess",
            EntryData::Czochralski(_) => "CPFSCzochralskiProcess",
            EntryData::FluxGrowth(_) => "CPFSFluxGrowthProcess",
        }
    }
}

impl Normalize for EntryData {
    fn normalize(&mut self, ctx: &NormalizeContext) {
        match self {
            EntryData::Furnace(e) => e.normalize(ctx),
            EntryData::Tube(e) => e.normalize(ctx),
            EntryData::Crucible(e) => e.normalize(ctx),
            EntryData::Crystal(e) => e.normalize(ctx),
            EntryData::Component(e) => e.normalize(ctx),
            EntryData::ChemicalVapourTransport(e) => e.normalize(ctx),
            EntryData::FloatingZone(e) => e.normalize(ctx),
            EntryData::Bridgman(e) => e.normalize(ctx),
            EntryData::Czochralski(e) => e.normalize(ctx),
            EntryData::FluxGrowth(e) => e.normalize(ctx),
        }
    }
}

/// 存档
///
/// `data` 之外的顶层字段（如 `metadata`）保存在 `extra` 中，写回时不丢失。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Archive {
    pub data: EntryData,

    #[serde(flatten)]
    pub extra: Extra,
}

impl Archive {
    pub fn new(data: EntryData) -> Self {
        Archive {
            data,
            extra: Extra::new(),
        }
    }
}

/// 从字符串内容解析存档
pub fn parse_archive_content(content: &str, path: &str) -> Result<Archive> {
    serde_json::from_str(content).map_err(|e| CpfsError::ArchiveError {
        path: path.to_string(),
        source: e,
    })
}

/// 读取存档文件
pub fn read_archive(path: &Path) -> Result<Archive> {
    if !path.exists() {
        return Err(CpfsError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| CpfsError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_archive_content(&content, &path.display().to_string())
}

/// 将存档序列化为带缩进的 JSON
pub fn to_archive_string(archive: &Archive) -> Result<String> {
    serde_json::to_string_pretty(archive).map_err(|e| CpfsError::ArchiveError {
        path: archive.data.schema().to_string(),
        source: e,
    })
}

/// 写入存档文件
pub fn write_archive(archive: &Archive, path: &Path) -> Result<()> {
    let content = to_archive_string(archive)?;
    fs::write(path, content + "\n").map_err(|e| CpfsError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}

/// 存档文件名：`<名称>_<schema>.archive.json`
///
/// 名称来自用户输入，先经 [`file_stem`] 清理，结果总是单个文件名。
pub fn archive_file_name(name: &str, schema: &str) -> String {
    format!("{}_{}{}", file_stem(name), schema, ARCHIVE_SUFFIX)
}

/// 将任意名称清理为不含路径成分的文件名前缀
///
/// 路径分隔符拆开的各段中，空段、`.` 和 `..` 被丢弃，其余以 `_` 连接：
/// `../a/b` -> `a_b`。清理后为空时返回 `unnamed`。
pub fn file_stem(name: &str) -> String {
    let stem = name
        .split(|c: char| matches!(c, '/' | '\\' | ':') || c.is_control())
        .map(str::trim)
        .filter(|part| !part.is_empty() && *part != "." && *part != "..")
        .collect::<Vec<_>>()
        .join("_");

    if stem.is_empty() {
        "unnamed".to_string()
    } else {
        stem
    }
}
