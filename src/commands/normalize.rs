//! # normalize 命令实现
//!
//! 读取存档，运行规范化钩子，内容有变化时写回。
//!
//! ## 功能
//! - 单文件或目录批量处理（rayon 并行）
//! - 浮区法记录若引用了表格模板，先导入模板并写出晶体存档
//! - `--dry-run` 只统计不写入
//!
//! ## 依赖关系
//! - 使用 `cli/normalize.rs` 定义的参数
//! - 使用 `archive.rs`, `ingest/`, `batch/`
//! - 使用 `utils/output.rs`

use crate::archive::{self, Archive, EntryData};
use crate::batch::{BatchRunner, FileCollector, ProcessResult};
use crate::cli::normalize::NormalizeArgs;
use crate::error::{CpfsError, Result};
use crate::ingest::{self, TemplateGrid, INVALID_TEMPLATE_NOTE};
use crate::models::{FloatingZoneProcess, Normalize, NormalizeContext};
use crate::utils::output;

use std::path::{Path, PathBuf};

/// 执行 normalize 命令
pub fn execute(args: NormalizeArgs) -> Result<()> {
    output::print_header("Normalizing Archives");

    if !args.input.exists() {
        return Err(CpfsError::FileNotFound {
            path: args.input.display().to_string(),
        });
    }

    let files: Vec<PathBuf> = FileCollector::new(args.input.clone())
        .with_pattern(&args.pattern)?
        .recursive(args.recursive)
        .collect();

    if files.is_empty() {
        return Err(CpfsError::NoFilesFound {
            pattern: args.pattern.clone(),
        });
    }

    output::print_info(&format!("Found {} archive(s)", files.len()));
    if args.dry_run {
        output::print_info("Dry run: no files will be written");
    }

    let ctx = NormalizeContext {
        location: args.location.clone(),
    };

    let result = BatchRunner::new(args.jobs).run(files, |path| {
        let name = path.display().to_string();
        match normalize_file(path, &ctx, args.dry_run) {
            Ok(true) => ProcessResult::Success(name),
            Ok(false) => ProcessResult::Skipped(name),
            Err(e) => ProcessResult::Failed(name, e.to_string()),
        }
    });

    for (path, err) in &result.failures {
        output::print_error(&format!("{}: {}", path, err));
    }

    let verb = if args.dry_run { "Would update" } else { "Updated" };
    output::print_done(&format!(
        "{} {} of {} archive(s) ({} unchanged, {} failed)",
        verb,
        result.success,
        result.total(),
        result.skipped,
        result.failed
    ));

    Ok(())
}

/// 规范化单个存档文件，返回内容是否变化
pub fn normalize_file(path: &Path, ctx: &NormalizeContext, dry_run: bool) -> Result<bool> {
    let mut archive = archive::read_archive(path)?;
    let before = archive.clone();

    let crystal_written = match &mut archive.data {
        EntryData::FloatingZone(process) => import_linked_template(process, path, ctx, dry_run)?,
        _ => false,
    };

    archive.data.normalize(ctx);

    if archive == before {
        tracing::debug!(path = %path.display(), "archive unchanged");
        return Ok(crystal_written);
    }

    if !dry_run {
        archive::write_archive(&archive, path)?;
    }
    Ok(true)
}

/// 导入浮区法记录引用的模板，模板路径相对于存档所在目录
///
/// 晶体存档只在不存在时写出，已有的晶体记录不会被覆盖。
/// 返回是否（将要）写出晶体存档。
fn import_linked_template(
    process: &mut FloatingZoneProcess,
    archive_path: &Path,
    ctx: &NormalizeContext,
    dry_run: bool,
) -> Result<bool> {
    let Some(template) = process.xlsx_file.clone() else {
        return Ok(false);
    };
    if template == INVALID_TEMPLATE_NOTE {
        return Ok(false);
    }

    let base = archive_path.parent().unwrap_or_else(|| Path::new("."));
    let grid = TemplateGrid::from_path(&base.join(&template))?;

    match ingest::apply_template(process, &grid, &template, ctx) {
        Ok(imported) => {
            let crystal_path = base.join(&imported.file_name);
            if crystal_path.exists() {
                tracing::debug!(path = %crystal_path.display(), "crystal archive exists, kept");
                return Ok(false);
            }
            if !dry_run {
                let crystal = Archive::new(EntryData::Crystal(imported.crystal));
                archive::write_archive(&crystal, &crystal_path)?;
                tracing::info!(path = %crystal_path.display(), "wrote crystal archive");
            }
            Ok(true)
        }
        Err(CpfsError::InvalidTemplate { .. }) => {
            tracing::warn!(template = %template, "not a floating zone template");
            process.xlsx_file = Some(INVALID_TEMPLATE_NOTE.to_string());
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Furnace;
    use std::fs;

    #[test]
    fn test_normalize_file_writes_and_then_skips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("f.archive.json");
        fs::write(
            &path,
            r#"{ "data": { "m_def": "CPFSFurnace", "name": "Furnace1" } }"#,
        )
        .unwrap();

        let ctx = NormalizeContext::default();
        assert!(normalize_file(&path, &ctx, false).unwrap());
        assert!(!normalize_file(&path, &ctx, false).unwrap());

        let archive = archive::read_archive(&path).unwrap();
        let EntryData::Furnace(Furnace { model, .. }) = archive.data else {
            panic!("expected furnace");
        };
        assert_eq!(model.as_deref(), Some("FurnaceModel1"));
    }

    #[test]
    fn test_dry_run_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c.archive.json");
        let content = r#"{ "data": { "m_def": "CPFSInitialSynthesisComponent", "name": "NaCl" } }"#;
        fs::write(&path, content).unwrap();

        assert!(normalize_file(&path, &NormalizeContext::default(), true).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_invalid_linked_template_is_marked() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("run.csv"),
            "a,b\nx,y\nx,y\nx,Template Bridgman\n",
        )
        .unwrap();
        let path = dir.path().join("fz.archive.json");
        fs::write(
            &path,
            r#"{ "data": { "m_def": "CPFSFloatingZoneProcess", "xlsx_file": "run.csv" } }"#,
        )
        .unwrap();

        normalize_file(&path, &NormalizeContext::default(), false).unwrap();

        let EntryData::FloatingZone(process) = archive::read_archive(&path).unwrap().data else {
            panic!("expected floating zone process");
        };
        assert_eq!(process.xlsx_file.as_deref(), Some(INVALID_TEMPLATE_NOTE));
        assert_eq!(process.header.location.as_deref(), Some("MPI CPfS Dresden"));
    }

    #[test]
    fn test_unknown_fields_are_kept_on_rewrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("f.archive.json");
        fs::write(
            &path,
            r#"{"metadata":{"entry_id":"abc"},"data":{"m_def":"CPFSFurnace","name":"Furnace1","operator":"Alice"}}"#,
        )
        .unwrap();

        assert!(normalize_file(&path, &NormalizeContext::default(), false).unwrap());

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["metadata"]["entry_id"], "abc");
        assert_eq!(value["data"]["operator"], "Alice");
        assert_eq!(value["data"]["heating"], "Induction");
    }

    /// 在 `dir` 下写出模板与引用它的浮区法存档，返回存档路径
    fn linked_process(dir: &Path, sample_id: &str) -> PathBuf {
        let csv = ingest::template_csv(&[
            (2, 1, "Template CPFSFloatingZone"),
            (10, 2, "FZ-9"),
            (38, 2, sample_id),
            (39, 2, "MnSi"),
        ]);
        fs::write(dir.join("t.csv"), csv).unwrap();

        let path = dir.join("fz.archive.json");
        fs::write(
            &path,
            r#"{ "data": { "m_def": "CPFSFloatingZoneProcess", "xlsx_file": "t.csv" } }"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn test_linked_template_writes_crystal_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = linked_process(dir.path(), "SC-5");
        let ctx = NormalizeContext::default();
        let crystal_path = dir.path().join("SC-5_MnSi_CPFSCrystal.archive.json");

        assert!(normalize_file(&path, &ctx, false).unwrap());
        assert!(crystal_path.exists());

        let mut crystal = archive::read_archive(&crystal_path).unwrap();
        let EntryData::Crystal(c) = &mut crystal.data else {
            panic!("expected crystal");
        };
        c.internal_sample_id = Some("LAB-99".to_string());
        archive::write_archive(&crystal, &crystal_path).unwrap();

        assert!(!normalize_file(&path, &ctx, false).unwrap());

        let EntryData::Crystal(c) = archive::read_archive(&crystal_path).unwrap().data else {
            panic!("expected crystal");
        };
        assert_eq!(c.internal_sample_id.as_deref(), Some("LAB-99"));
    }

    #[test]
    fn test_missing_crystal_counts_as_change() {
        let dir = tempfile::tempdir().unwrap();
        let path = linked_process(dir.path(), "SC-6");
        let ctx = NormalizeContext::default();
        let crystal_path = dir.path().join("SC-6_MnSi_CPFSCrystal.archive.json");

        normalize_file(&path, &ctx, false).unwrap();
        fs::remove_file(&crystal_path).unwrap();

        assert!(normalize_file(&path, &ctx, false).unwrap());
        assert!(crystal_path.exists());
    }

    #[test]
    fn test_crystal_name_cannot_leave_archive_dir() {
        let root = tempfile::tempdir().unwrap();
        let upload = root.path().join("upload");
        fs::create_dir(&upload).unwrap();
        let path = linked_process(&upload, "../escaped");

        normalize_file(&path, &NormalizeContext::default(), false).unwrap();

        assert!(!root.path().join("escaped_MnSi_CPFSCrystal.archive.json").exists());
        assert!(upload.join("escaped_MnSi_CPFSCrystal.archive.json").exists());
    }

    #[test]
    fn test_missing_template_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fz.archive.json");
        fs::write(
            &path,
            r#"{ "data": { "m_def": "CPFSFloatingZoneProcess", "xlsx_file": "gone.csv" } }"#,
        )
        .unwrap();

        let result = normalize_file(&path, &NormalizeContext::default(), false);
        assert!(matches!(result, Err(CpfsError::FileReadError { .. })));
    }
}
