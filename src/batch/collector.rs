//! # 存档文件收集器
//!
//! 根据输入路径和模式收集待规范化的存档文件。
//!
//! ## 功能
//! - 支持单文件和目录输入
//! - glob 模式匹配（逗号分隔多个模式）
//! - 递归目录搜索
//!
//! ## 依赖关系
//! - 被 `commands/normalize.rs` 调用
//! - 使用 `walkdir` 遍历目录, `glob` 匹配文件名

use crate::error::{CpfsError, Result};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 输入路径
    input: PathBuf,
    /// 匹配模式列表
    patterns: Vec<glob::Pattern>,
    /// 是否递归
    recursive: bool,
}

impl FileCollector {
    /// 创建新的文件收集器
    ///
    /// 未调用 [`with_pattern`](Self::with_pattern) 时模式列表为空，
    /// 此时 `matches_patterns` 按 `ARCHIVE_SUFFIX` 后缀匹配。
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            patterns: Vec::new(),
            recursive: false,
        }
    }

    /// 设置匹配模式（逗号分隔的多模式）
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        self.patterns = pattern
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                glob::Pattern::new(s).map_err(|e| {
                    CpfsError::InvalidArgument(format!("Invalid pattern '{}': {}", s, e))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(self)
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有匹配的文件（已排序）
    pub fn collect(&self) -> Vec<PathBuf> {
        if self.input.is_file() {
            return vec![self.input.clone()];
        }

        if !self.input.is_dir() {
            return vec![];
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let mut files: Vec<PathBuf> = WalkDir::new(&self.input)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|entry| self.matches_patterns(entry.path()))
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        files
    }

    /// 检查文件是否匹配任一模式
    fn matches_patterns(&self, path: &Path) -> bool {
        let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };

        if self.patterns.is_empty() {
            return filename.ends_with(crate::archive::ARCHIVE_SUFFIX);
        }

        self.patterns.iter().any(|p| p.matches(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_pattern_matches_archives() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.archive.json"), "{}").unwrap();
        fs::write(dir.path().join("b.csv"), "").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("c.archive.json"), "{}").unwrap();

        let flat = FileCollector::new(dir.path().to_path_buf()).collect();
        assert_eq!(flat.len(), 1);
        assert!(flat[0].ends_with("a.archive.json"));

        let deep = FileCollector::new(dir.path().to_path_buf())
            .recursive(true)
            .collect();
        assert_eq!(deep.len(), 2);
    }

    #[test]
    fn test_multiple_patterns() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("fz.archive.json"), "{}").unwrap();
        fs::write(dir.path().join("template.csv"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let files = FileCollector::new(dir.path().to_path_buf())
            .with_pattern("*.json, *.csv")
            .unwrap()
            .collect();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_blank_pattern_falls_back_to_archive_suffix() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.archive.json"), "{}").unwrap();
        fs::write(dir.path().join("a.json"), "{}").unwrap();

        let files = FileCollector::new(dir.path().to_path_buf())
            .with_pattern(" , ")
            .unwrap()
            .collect();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("a.archive.json"));
    }

    #[test]
    fn test_invalid_pattern() {
        let result = FileCollector::new(PathBuf::from(".")).with_pattern("[");
        assert!(result.is_err());
    }

    #[test]
    fn test_single_file_input() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("one.txt");
        fs::write(&file, "").unwrap();

        let files = FileCollector::new(file.clone()).collect();
        assert_eq!(files, vec![file]);
    }
}
