//! # import 命令实现
//!
//! 从浮区法表格模板生成工艺存档和晶体存档。
//!
//! ## 功能
//! - 校验模板标识
//! - 按固定单元格位置导入，并规范化工艺记录
//! - 写出 `<工艺名>_CPFSFloatingZoneProcess.archive.json`
//!   与 `<样品编号>_<成分>_CPFSCrystal.archive.json`
//!
//! ## 依赖关系
//! - 使用 `cli/import.rs` 定义的参数
//! - 使用 `ingest/`, `archive.rs`, `models/`
//! - 使用 `utils/output.rs`

use crate::archive::{self, Archive, EntryData};
use crate::cli::import::ImportArgs;
use crate::error::{CpfsError, Result};
use crate::ingest::{self, TemplateGrid};
use crate::models::{FloatingZoneProcess, Normalize, NormalizeContext};
use crate::utils::output;

use std::fs;
use std::path::Path;

/// 执行 import 命令
pub fn execute(args: ImportArgs) -> Result<()> {
    output::print_header("Importing Floating Zone Template");

    if !args.template.exists() {
        return Err(CpfsError::FileNotFound {
            path: args.template.display().to_string(),
        });
    }

    let ctx = NormalizeContext {
        location: args.location.clone(),
    };

    let grid = TemplateGrid::from_path(&args.template)?;
    let mut process = FloatingZoneProcess::default();
    let imported = ingest::apply_template(
        &mut process,
        &grid,
        &args.template.display().to_string(),
        &ctx,
    )?;
    process.normalize(&ctx);

    let output_dir = match &args.output_dir {
        Some(dir) => dir.clone(),
        None => args
            .template
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default(),
    };
    fs::create_dir_all(&output_dir).map_err(|e| CpfsError::FileWriteError {
        path: output_dir.display().to_string(),
        source: e,
    })?;

    let stem = process.header.name.clone().unwrap_or_else(|| {
        args.template
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("floating_zone")
            .to_string()
    });
    let process_file = archive::archive_file_name(&stem, "CPFSFloatingZoneProcess");

    let entries = [
        (
            output_dir.join(&imported.file_name),
            Archive::new(EntryData::Crystal(imported.crystal)),
        ),
        (
            output_dir.join(&process_file),
            Archive::new(EntryData::FloatingZone(process)),
        ),
    ];

    for (path, entry) in &entries {
        if path.exists() && !args.overwrite {
            output::print_skip(&format!(
                "{} exists (use --overwrite to replace)",
                path.display()
            ));
            continue;
        }
        archive::write_archive(entry, path)?;
        output::print_success(&format!("{} -> {}", entry.data.schema(), path.display()));
    }

    output::print_done(&format!("Imported '{}'", args.template.display()));
    Ok(())
}
